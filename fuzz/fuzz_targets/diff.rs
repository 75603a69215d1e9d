#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str, u8)| {
    let (left, right, n) = input;

    let full = serr::diff(left, right, usize::MAX);
    let prefix_and_suffix = full.common_prefix + full.common_suffix;
    assert_eq!(prefix_and_suffix + full.left.chars().count(), left.chars().count());
    assert_eq!(prefix_and_suffix + full.right.chars().count(), right.chars().count());
    assert_eq!(full.is_identical(), left == right);

    let bounded = serr::diff(left, right, usize::from(n));
    assert_eq!(bounded.common_prefix, full.common_prefix);
    assert_eq!(bounded.common_suffix, full.common_suffix);
    let _ = bounded.to_string();
});
