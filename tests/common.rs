#![allow(unused_macros, dead_code)]

pub use indoc::indoc;
pub use paste::paste;
pub use serr::*;

macro_rules! assert_str_eq {
    ($actual:expr, $expected:expr) => {{
        let actual: &str = &$actual;
        let expected: &str = &$expected;
        if actual != expected {
            panic!(
                indoc! {"
                string not expected value:
                ============================EXPECTED==========================
                {}
                =============================ACTUAL===========================
                {}
                ==============================DIFF============================
                {}
                ==============================================================
            "},
                expected,
                actual,
                colored_diff::PrettyDifference { expected, actual },
            );
        }
    }};
}

macro_rules! assert_char_len {
    ($s:expr, $len:expr) => {{
        let s: &str = &$s;
        assert_eq!(
            s.chars().count(),
            $len,
            "char length of {:?} not expected value",
            s
        );
    }};
}

/// A run of `n` dashes used to pad the common regions of diff inputs.
pub fn dashes(n: usize) -> String {
    "-".repeat(n)
}

pub fn ellipsis() -> String {
    ELLIPSIS.to_string()
}
