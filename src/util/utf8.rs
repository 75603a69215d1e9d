/// A run of chars measured both in chars and in the bytes they occupy.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Run {
    pub(crate) chars: usize,
    pub(crate) bytes: usize,
}

impl Run {
    #[inline(always)]
    fn push(&mut self, c: char) {
        self.chars += 1;
        self.bytes += c.len_utf8();
    }
}

/// Returns the first `n` chars of `s`, or all of `s` if it is shorter.
pub(crate) fn head(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Returns the last `n` chars of `s`, or all of `s` if it is shorter.
pub(crate) fn tail(s: &str, n: usize) -> &str {
    if n == 0 {
        return &s[s.len()..];
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((start, _)) => &s[start..],
        None => s,
    }
}

/// Scans both strings from the front in lockstep, stopping at the first pair
/// of chars that differ or when either string is exhausted.
///
/// Equal chars have equal encoded lengths, so the returned byte count is a
/// valid boundary in both strings.
pub(crate) fn common_head(a: &str, b: &str) -> Run {
    let mut run = Run::default();
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            break;
        }
        run.push(x);
    }
    run
}

/// Scans both strings from the back in lockstep.
///
/// See [`common_head`].
pub(crate) fn common_tail(a: &str, b: &str) -> Run {
    let mut run = Run::default();
    for (x, y) in a.chars().rev().zip(b.chars().rev()) {
        if x != y {
            break;
        }
        run.push(x);
    }
    run
}
