#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, u8)| {
    let (s, width) = input;
    let width = usize::from(width);
    let count = s.chars().count();
    let excerpt = serr::excerpt(s, width);
    assert_eq!(excerpt.chars().count(), count.min(width));
    if count <= width {
        assert_eq!(excerpt, s);
    }
    let _ = serr::excerpt_with_len(s, width);
});
