//! Multi-byte text: the unit of permutation is `char`, never a byte.

use rearrange::{decode, encode};

#[test]
fn accented_latin() {
    let text = "résumé";
    let encoded = encode(text);
    assert_eq!(encoded, "rsméué");
    assert_eq!(decode(&encoded), text);
}

#[test]
fn telugu_script() {
    let text = "తెలుగు";
    let encoded = encode(text);
    assert_eq!(encoded.chars().count(), text.chars().count());
    assert_eq!(decode(&encoded), text);
}

#[test]
fn emoji_and_mixed_widths() {
    let text = "a🦀b→c";
    assert_eq!(encode(text), "abc🦀→");
    assert_eq!(decode("abc🦀→"), text);
}

#[test]
fn whitespace_and_control_chars_are_ordinary() {
    let text = "a\tb\nc d";
    assert_eq!(encode(text), "abcd\t\n ");
    assert_eq!(decode(&encode(text)), text);
}
