//! Length, multiset and fixed-point invariants.

use super::common::{byte_sequence, sorted, unicode_text};
use proptest::prelude::*;
use rearrange::{decode, decode_slice, encode, encode_slice, Layout};

proptest! {
    /// Property: encoding never changes the number of chars.
    #[test]
    fn prop_encode_preserves_length(text in unicode_text()) {
        prop_assert_eq!(encode(&text).chars().count(), text.chars().count());
        prop_assert_eq!(decode(&text).chars().count(), text.chars().count());
    }

    /// Property: both directions only reorder; nothing created or lost.
    #[test]
    fn prop_preserves_multiset(bytes in byte_sequence()) {
        prop_assert_eq!(sorted(&encode_slice(&bytes)), sorted(&bytes));
        prop_assert_eq!(sorted(&decode_slice(&bytes)), sorted(&bytes));
    }

    /// Property: single elements are fixed points.
    #[test]
    fn prop_single_char_unchanged(c in any::<char>()) {
        let s = c.to_string();
        prop_assert_eq!(encode(&s), s.clone());
        prop_assert_eq!(decode(&s), s);
    }

    /// Property: the front of an encoding is exactly the even group.
    #[test]
    fn prop_front_is_even_group(bytes in byte_sequence()) {
        let layout = Layout::new(bytes.len());
        let encoded = encode_slice(&bytes);
        let (front, back) = encoded.split_at(layout.even_count());
        let evens: Vec<u8> = bytes.iter().step_by(2).copied().collect();
        let odds: Vec<u8> = bytes.iter().skip(1).step_by(2).copied().collect();
        prop_assert_eq!(front, evens.as_slice());
        prop_assert_eq!(back, odds.as_slice());
    }

    /// Property: source_index and encoded_index are mutual inverses.
    #[test]
    fn prop_layout_indices_invert(n in 0usize..2048) {
        let layout = Layout::new(n);
        prop_assert!(layout.is_balanced());
        for i in 0..n {
            let src = layout.source_index(i).unwrap();
            prop_assert!(src < n);
            prop_assert_eq!(layout.encoded_index(src), Some(i));
        }
        prop_assert_eq!(layout.source_index(n), None);
    }
}

#[test]
fn empty_is_fixed_point() {
    assert_eq!(encode(""), "");
    assert_eq!(decode(""), "");
    assert!(encode_slice::<u8>(&[]).is_empty());
    assert!(decode_slice::<u8>(&[]).is_empty());
}
