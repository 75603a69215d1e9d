use std::borrow::Cow;
use std::fmt;

use crate::util::utf8;

use super::{excerpt, CharCount};

/// The differing middles of two strings once their common leading and
/// trailing chars are stripped.
///
/// Returned by [`diff()`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Diff<'a> {
    /// The differing middle of the left string, excerpted if too long.
    pub left: Cow<'a, str>,
    /// The differing middle of the right string, excerpted if too long.
    pub right: Cow<'a, str>,
    /// The number of leading chars both strings share.
    pub common_prefix: usize,
    /// The number of trailing chars both strings share, after the common
    /// prefix was taken.
    pub common_suffix: usize,
}

impl<'a> Diff<'a> {
    /// Returns `true` if the two strings compared were identical.
    pub fn is_identical(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

impl<'a> fmt::Display for Diff<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identical() {
            return write!(f, "identical over {}", CharCount(self.common_prefix));
        }
        write!(
            f,
            "differs after {} and before {}: ",
            CharCount(self.common_prefix),
            CharCount(self.common_suffix),
        )?;
        #[cfg(feature = "terminal")]
        {
            if f.alternate() {
                use owo_colors::OwoColorize;
                return write!(f, "'{}' vs '{}'", self.left.red(), self.right.green());
            }
        }
        write!(f, "'{}' vs '{}'", self.left, self.right)
    }
}

/// Finds where two strings differ.
///
/// Chars are compared from the start of both strings in lockstep until the
/// first mismatch, then from the end of what remains. The unmatched middles
/// are returned, each passed through [`excerpt()`] with a width of `n` when
/// its length in bytes is greater than `n`.
///
/// Identical strings produce empty middles, a `common_prefix` of their full
/// char count and a `common_suffix` of zero.
///
/// # Example
///
/// ```
/// let diff = serr::diff("--ABCDEFGHI--", "--XYZ--", 5);
///
/// assert_eq!(diff.left, "AB\u{2026}HI");
/// assert_eq!(diff.right, "XYZ");
/// assert_eq!(diff.common_prefix, 2);
/// assert_eq!(diff.common_suffix, 2);
/// ```
pub fn diff<'a>(left: &'a str, right: &'a str, n: usize) -> Diff<'a> {
    let head = utf8::common_head(left, right);
    let (left, right) = (&left[head.bytes..], &right[head.bytes..]);
    if left.is_empty() && right.is_empty() {
        return Diff {
            left: Cow::Borrowed(left),
            right: Cow::Borrowed(right),
            common_prefix: head.chars,
            common_suffix: 0,
        };
    }
    let tail = utf8::common_tail(left, right);
    let left = &left[..left.len() - tail.bytes];
    let right = &right[..right.len() - tail.bytes];
    Diff {
        left: bound(left, n),
        right: bound(right, n),
        common_prefix: head.chars,
        common_suffix: tail.chars,
    }
}

// The bound is checked against the byte length while `excerpt` counts chars,
// so a non-ASCII middle may come back untouched.
fn bound(middle: &str, n: usize) -> Cow<'_, str> {
    if middle.len() > n {
        excerpt(middle, n)
    } else {
        Cow::Borrowed(middle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_identical() {
        let diff = diff("héllo", "héllo", 3);
        assert!(diff.is_identical());
        assert_eq!(diff.common_prefix, 5);
        assert_eq!(diff.common_suffix, 0);
    }

    #[test]
    fn test_diff_one_side_empty() {
        let diff = diff("abc", "abcdef", 10);
        assert_eq!(diff.left, "");
        assert_eq!(diff.right, "def");
        assert_eq!(diff.common_prefix, 3);
        assert_eq!(diff.common_suffix, 0);
        assert!(!diff.is_identical());
    }

    #[test]
    fn test_diff_overlapping_affixes() {
        // The suffix scan only sees what the prefix scan left behind.
        let diff = diff("aa", "aaa", 10);
        assert_eq!(diff.left, "");
        assert_eq!(diff.right, "a");
        assert_eq!(diff.common_prefix, 2);
        assert_eq!(diff.common_suffix, 0);
    }

    #[test]
    fn test_diff_byte_bound_on_multi_byte() {
        // 3 chars, 9 bytes: over the bound by bytes but within it by chars.
        let diff = diff("-♥♥♥-", "-x-", 4);
        assert_eq!(diff.left, "♥♥♥");
        assert_eq!(diff.right, "x");
    }

    #[test]
    fn test_diff_display() {
        assert_eq!(diff("abc", "abc", 5).to_string(), "identical over 3 chars");
        assert_eq!(
            diff("-abc-", "-xyz-", 5).to_string(),
            "differs after 1 char and before 1 char: 'abc' vs 'xyz'"
        );
    }
}
