//! Differential tests: library vs the naive oracles in `rearrange::testing`.

use super::common::{
    byte_sequence, oracle_decode, oracle_decode_str, oracle_encode, oracle_encode_str,
    unicode_text,
};
use proptest::prelude::*;
use rearrange::{decode, decode_slice, encode, encode_slice};

// =============================================================================
// SLICES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: encode_slice matches the parity-bucket oracle.
    #[test]
    fn diff_encode_slice(bytes in byte_sequence()) {
        prop_assert_eq!(encode_slice(&bytes), oracle_encode(&bytes));
    }

    /// Differential test: decode_slice matches the fill-the-slots oracle.
    #[test]
    fn diff_decode_slice(bytes in byte_sequence()) {
        prop_assert_eq!(decode_slice(&bytes), oracle_decode(&bytes));
    }

    /// Cross-roundtrip: library encode, oracle decode.
    #[test]
    fn diff_cross_roundtrip(bytes in byte_sequence()) {
        prop_assert_eq!(oracle_decode(&encode_slice(&bytes)), bytes.clone());
        prop_assert_eq!(decode_slice(&oracle_encode(&bytes)), bytes);
    }
}

// =============================================================================
// STRINGS
// =============================================================================

proptest! {
    /// Differential test: string forms agree with the oracles on any Unicode.
    #[test]
    fn diff_strings(text in unicode_text()) {
        prop_assert_eq!(encode(&text), oracle_encode_str(&text));
        prop_assert_eq!(decode(&text), oracle_decode_str(&text));
    }
}
