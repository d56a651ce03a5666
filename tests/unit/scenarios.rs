//! The literal scenario table, checked directly against the library.

use rearrange::selftest::SCENARIOS;
use rearrange::{check_roundtrip, decode, encode};

#[test]
fn scenario_table_encodes_exactly() {
    for &(input, expected) in SCENARIOS {
        assert_eq!(encode(input), expected, "encode({:?})", input);
    }
}

#[test]
fn scenario_table_decodes_back() {
    for &(input, expected) in SCENARIOS {
        assert_eq!(decode(expected), input, "decode({:?})", expected);
        assert_eq!(decode(&encode(input)), input);
    }
}

#[test]
fn scenario_table_roundtrip_checker_agrees() {
    for &(input, expected) in SCENARIOS {
        assert_eq!(check_roundtrip(input).as_deref(), Ok(expected));
    }
}

#[test]
fn scenario_literals() {
    assert_eq!(encode("message"), "msaeesg");
    assert_eq!(encode("hello"), "hloel");
    assert_eq!(encode("abcd"), "acbd");
    assert_eq!(encode("a"), "a");
    assert_eq!(encode(""), "");
}

#[test]
fn hello_follows_even_then_odd_rule() {
    // evens h,l,o then odds e,l
    assert_eq!(encode("hello"), "hloel");
    assert_eq!(decode("hloel"), "hello");
}

#[test]
fn two_char_input_is_unchanged() {
    // even group "a", odd group "b"
    assert_eq!(encode("ab"), "ab");
    assert_eq!(decode("ab"), "ab");
}

#[test]
fn repeated_characters_roundtrip() {
    for text in ["aaaa", "abab", "aabb", "zzzzzzz", "abba"] {
        assert_eq!(decode(&encode(text)), text);
    }
    assert_eq!(encode("abab"), "aabb");
    assert_eq!(decode("aabb"), "abab");
}

#[test]
fn decode_of_unrelated_text_is_still_a_permutation() {
    let garbage = "not an encoding!";
    let out = decode(garbage);
    assert_eq!(out.chars().count(), garbage.chars().count());
    assert_eq!(encode(&out), garbage);
}
