//! Shared test utilities and strategies.

#![allow(dead_code)]

use proptest::prelude::*;

// Re-export canonical test utilities from rearrange::testing
pub use rearrange::testing::{
    oracle_decode, oracle_decode_str, oracle_encode, oracle_encode_str, sorted,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short ASCII words, where the scenario-style bugs show up.
pub fn ascii_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,40}").unwrap()
}

/// Text with a small alphabet, so repeated characters are common.
pub fn repetitive_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,32}").unwrap()
}

/// Arbitrary Unicode scalar values, multi-byte and all.
pub fn unicode_text() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..48).prop_map(|chars| chars.into_iter().collect())
}

/// Generic element sequences.
pub fn byte_sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..128)
}
