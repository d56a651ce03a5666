//! The inverse law, in both directions.

use super::common::{ascii_text, byte_sequence, repetitive_text, unicode_text};
use proptest::prelude::*;
use rearrange::{check_roundtrip, decode, decode_slice, encode, encode_slice};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: decode(encode(s)) == s for ASCII text.
    #[test]
    fn prop_roundtrip_ascii(text in ascii_text()) {
        prop_assert_eq!(decode(&encode(&text)), text);
    }

    /// Property: repeated characters do not confuse the decoder.
    #[test]
    fn prop_roundtrip_repetitive(text in repetitive_text()) {
        prop_assert_eq!(decode(&encode(&text)), text);
    }

    /// Property: any Unicode text survives the roundtrip.
    #[test]
    fn prop_roundtrip_unicode(text in unicode_text()) {
        prop_assert!(check_roundtrip(&text).is_ok());
    }

    /// Property: the slice forms are inverses for arbitrary elements.
    #[test]
    fn prop_roundtrip_slice(bytes in byte_sequence()) {
        prop_assert_eq!(decode_slice(&encode_slice(&bytes)), bytes);
    }

    /// Property: encode(decode(e)) == e, so every sequence is some encoding.
    #[test]
    fn prop_encode_inverts_decode(bytes in byte_sequence()) {
        prop_assert_eq!(encode_slice(&decode_slice(&bytes)), bytes);
    }
}
