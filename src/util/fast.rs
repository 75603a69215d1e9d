///////////////////////////////////////////////////////////////////////////////
// char

#[cfg(feature = "bytecount")]
#[inline(always)]
pub(crate) fn num_chars(s: &str) -> usize {
    bytecount::num_chars(s.as_bytes())
}

#[cfg(not(feature = "bytecount"))]
#[inline(always)]
pub(crate) fn num_chars(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_chars() {
        assert_eq!(num_chars(""), 0);
        assert_eq!(num_chars("hello"), 5);
        assert_eq!(num_chars("hello ♥"), 7);
        assert_eq!(num_chars("\u{10348}a\u{10347}"), 3);
    }
}
