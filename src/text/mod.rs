//! Bounded excerpts and two-sided diffs of long strings.
//!
//! Error messages that reference large payloads, such as two document bodies
//! that were expected to match, stay readable by keeping only the leading and
//! trailing chars of a string around an [`ELLIPSIS`].
//!
//! All widths are measured in chars, never in bytes, so multi-byte chars are
//! never split.

mod diff;

use std::borrow::Cow;
use std::fmt;

use crate::util::fast::num_chars;
use crate::util::utf8;

pub use self::diff::{diff, Diff};

/// The char inserted in place of the omitted middle of an excerpt.
pub const ELLIPSIS: char = '\u{2026}';

/// Truncates `s` to at most `width` chars, replacing the omitted middle with
/// an [`ELLIPSIS`].
///
/// If `s` fits within `width` it is returned unchanged. Otherwise the result
/// keeps `width / 2` leading chars and `width / 2` trailing chars, minus one
/// trailing char when `width` is even to leave room for the ellipsis. The
/// result is always exactly `min(width, char_count(s))` chars long.
///
/// # Example
///
/// ```
/// assert_eq!(serr::excerpt("ABCDEFGHIJ", 7), "ABC\u{2026}HIJ");
/// assert_eq!(serr::excerpt("ABCDEFGHIJ", 6), "ABC\u{2026}IJ");
/// assert_eq!(serr::excerpt("ABCDEFGHIJ", 10), "ABCDEFGHIJ");
/// ```
pub fn excerpt(s: &str, width: usize) -> Cow<'_, str> {
    if num_chars(s) <= width {
        return Cow::Borrowed(s);
    }
    if width == 0 {
        return Cow::Borrowed("");
    }
    let prefix = width / 2;
    let suffix = if width % 2 == 0 { prefix - 1 } else { prefix };
    let head = utf8::head(s, prefix);
    let tail = utf8::tail(s, suffix);
    let mut out = String::with_capacity(head.len() + ELLIPSIS.len_utf8() + tail.len());
    out.push_str(head);
    out.push(ELLIPSIS);
    out.push_str(tail);
    Cow::Owned(out)
}

/// Returns an [`excerpt`] of `s` prefixed with the byte length of the
/// original string.
///
/// # Example
///
/// ```
/// assert_eq!(
///     serr::excerpt_with_len("ABCDEFGHIJ", 3),
///     "[len=10] A\u{2026}J",
/// );
/// ```
pub fn excerpt_with_len(s: &str, width: usize) -> String {
    format!("[len={}] {}", s.len(), excerpt(s, width))
}

pub(crate) struct CharCount(pub(crate) usize);

impl fmt::Display for CharCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("no chars"),
            1 => f.write_str("1 char"),
            n => write!(f, "{} chars", n),
        }
    }
}
