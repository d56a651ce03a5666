// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the encode/decode roundtrip on text.
//!
//! Any valid UTF-8 the fuzzer finds must come back unchanged, with the same
//! number of chars after encoding, and in agreement with the naive oracle.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rearrange::testing::oracle_encode_str;
use rearrange::{decode, encode};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let encoded = encode(text);

    // Property 1: length in chars is preserved
    assert_eq!(
        encoded.chars().count(),
        text.chars().count(),
        "encode changed char count for {:?}",
        text
    );

    // Property 2: same bytes overall, since only whole chars move
    assert_eq!(encoded.len(), text.len());

    // Property 3: decode inverts encode
    assert_eq!(decode(&encoded), text, "Roundtrip failed for {:?}", text);

    // Property 4: matches the oracle
    assert_eq!(encoded, oracle_encode_str(text));
});
