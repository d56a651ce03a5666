// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for decoding input that never came out of the encoder.
//!
//! The decoder is total. Garbage in gives a same-length permutation out, and
//! encoding that permutation must give the garbage back.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rearrange::testing::{oracle_decode, sorted};
use rearrange::{decode_slice, encode_slice};

fuzz_target!(|data: &[u8]| {
    // Property 1: decode never panics and keeps the length
    let decoded = decode_slice(data);
    assert_eq!(decoded.len(), data.len());

    // Property 2: nothing created or lost
    assert_eq!(sorted(&decoded), sorted(data));

    // Property 3: encode inverts decode
    assert_eq!(encode_slice(&decoded), data);

    // Property 4: matches the oracle
    assert_eq!(decoded, oracle_decode(data));
});
