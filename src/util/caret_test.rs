use super::*;

#[test]
fn ascii_offsets_match() {
    assert_eq!(utf16_to_char_offset("hello", 3), 3);
    assert_eq!(char_to_utf16_offset("hello", 3), 3);
}

#[test]
fn astral_chars_take_two_units() {
    let text = "a😀b";
    assert_eq!(char_to_utf16_offset(text, 2), 3);
    assert_eq!(utf16_to_char_offset(text, 3), 2);
    // Inside the surrogate pair rounds up.
    assert_eq!(utf16_to_char_offset(text, 2), 2);
}

#[test]
fn offsets_past_end_clamp() {
    assert_eq!(utf16_to_char_offset("ab", 10), 2);
    assert_eq!(char_to_utf16_offset("ab", 10), 2);
    assert_eq!(utf16_to_char_offset("", 0), 0);
}
