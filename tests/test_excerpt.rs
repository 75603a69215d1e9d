#[macro_use]
mod common;

use common::*;

macro_rules! excerpt_cases {
    ($($name:ident: ($source:expr, $width:expr) => $want:expr,)*) => {
        paste! {
            $(
                #[test]
                fn [<test_excerpt_ $name>]() {
                    let source: &str = &$source;
                    let got = excerpt(source, $width);
                    assert_char_len!(got, std::cmp::min($width, source.chars().count()));
                    assert_str_eq!(got, $want);
                }
            )*
        }
    };
}

excerpt_cases! {
    shorter_than_width: ("ABCDEFGHIJ", 13) => "ABCDEFGHIJ",
    equal_to_width: ("ABCDEFGHIJ", 10) => "ABCDEFGHIJ",
    odd_width: ("ABCDEFGHIJ", 7) => format!("ABC{}HIJ", ellipsis()),
    even_width: ("ABCDEFGHIJ", 8) => format!("ABCD{}HIJ", ellipsis()),
    width_3: ("ABCDEFGHIJ", 3) => format!("A{}J", ellipsis()),
    width_2: ("ABCDEFGHIJ", 2) => format!("A{}", ellipsis()),
    width_1: ("ABCDEFGHIJ", 1) => ellipsis(),
    width_0: ("ABCDEFGHIJ", 0) => "",
    empty: ("", 4) => "",
    multi_byte_odd: ("♥♦♣♠♥♦♣♠", 5) => format!("♥♦{}♣♠", ellipsis()),
    multi_byte_even: ("♥♦♣♠♥♦♣♠", 6) => format!("♥♦♣{}♣♠", ellipsis()),
    four_byte: ("\u{10348}\u{10349}\u{1034A}\u{1034B}", 3) => format!("\u{10348}{}\u{1034B}", ellipsis()),
}

#[test]
fn test_excerpt_length_invariant() {
    let source = "hello ♥ wörld, this is \u{10348} long enough";
    let count = source.chars().count();
    for width in 0..count + 4 {
        let got = excerpt(source, width);
        assert_char_len!(got, std::cmp::min(width, count));
        if width >= count {
            assert_str_eq!(got, source);
        }
    }
}

#[test]
fn test_excerpt_keeps_prefix_and_suffix() {
    let source: String = ('a'..='z').collect();
    for width in 1..source.len() {
        let got = excerpt(&source, width);
        let prefix = width / 2;
        let suffix = if width % 2 == 0 { prefix - 1 } else { prefix };
        assert!(got.starts_with(&source[..prefix]), "{}: {}", width, got);
        assert!(got.ends_with(&source[source.len() - suffix..]), "{}: {}", width, got);
        assert_eq!(got.chars().nth(prefix), Some(ELLIPSIS));
    }
}

#[test]
fn test_excerpt_with_len() {
    assert_str_eq!(
        excerpt_with_len("ABCDEFGHIJ", 7),
        format!("[len=10] ABC{}HIJ", ellipsis())
    );
    assert_str_eq!(excerpt_with_len("ABC", 7), "[len=3] ABC");
    // Length is in bytes of the original, not of the excerpt.
    assert_str_eq!(
        excerpt_with_len("♥♥♥♥", 3),
        format!("[len=12] ♥{}♥", ellipsis())
    );
}
