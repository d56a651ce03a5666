// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the even/odd permutation.
//!
//! This standalone crate carries the slice encoder and decoder and proves
//! them correct for every byte sequence up to `MAX_LEN` elements.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: encode and decode never panic
//! 2. **Length**: output length equals input length
//! 3. **Roundtrip**: decode(encode(x)) == x and encode(decode(x)) == x

/// Largest sequence the proofs quantify over.
pub const MAX_LEN: usize = 8;

// ============================================================================
// PERMUTATION (same algorithm as src/cipher.rs)
// ============================================================================

/// Even-indexed elements, then odd-indexed elements.
pub fn encode<T: Clone>(input: &[T]) -> Vec<T> {
    let mut output = Vec::with_capacity(input.len());
    output.extend(input.iter().step_by(2).cloned());
    output.extend(input.iter().skip(1).step_by(2).cloned());
    output
}

/// Split at `ceil(n/2)` and interleave.
pub fn decode<T: Clone>(input: &[T]) -> Vec<T> {
    let even_count = input.len() / 2 + input.len() % 2;
    let (evens, odds) = input.split_at(even_count);
    let mut output = Vec::with_capacity(input.len());
    let mut odds = odds.iter();
    for even in evens {
        output.push(even.clone());
        if let Some(odd) = odds.next() {
            output.push(odd.clone());
        }
    }
    output
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic bytes of symbolic length `<= MAX_LEN`.
    fn any_bytes() -> ([u8; MAX_LEN], usize) {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut bytes = [0u8; MAX_LEN];
        for i in 0..MAX_LEN {
            bytes[i] = kani::any();
        }
        (bytes, len)
    }

    /// Verify encode never panics and preserves length.
    #[kani::proof]
    #[kani::unwind(10)] // MAX_LEN + 2
    fn verify_encode_length() {
        let (bytes, len) = any_bytes();
        let encoded = encode(&bytes[..len]);
        kani::assert(encoded.len() == len, "encode must preserve length");
    }

    /// Verify decode never panics and preserves length, for any input.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_decode_length() {
        let (bytes, len) = any_bytes();
        let decoded = decode(&bytes[..len]);
        kani::assert(decoded.len() == len, "decode must preserve length");
    }

    /// Verify roundtrip: decode(encode(x)) == x.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_roundtrip() {
        let (bytes, len) = any_bytes();
        let original = &bytes[..len];
        let decoded = decode(&encode(original));
        kani::assert(decoded.as_slice() == original, "Roundtrip must preserve sequence");
    }

    /// Verify the other direction: encode(decode(x)) == x.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_reverse_roundtrip() {
        let (bytes, len) = any_bytes();
        let original = &bytes[..len];
        let encoded = encode(&decode(original));
        kani::assert(encoded.as_slice() == original, "encode must invert decode");
    }

    /// Verify the first element never moves.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_first_element_fixed() {
        let (bytes, len) = any_bytes();
        kani::assume(len > 0);
        let encoded = encode(&bytes[..len]);
        kani::assert(encoded[0] == bytes[0], "position 0 is always first");
    }
}
