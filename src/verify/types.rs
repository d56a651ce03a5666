// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Roundtrip checking with a typed failure.
//!
//! The contracts panic. Sometimes you want the failure as a value instead,
//! for instance to print it in a self-test table and keep going. That is what
//! [`check_roundtrip`] is for.

use crate::cipher::{decode, encode};
use std::fmt;

/// A text that did not survive encode-then-decode, or changed length on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundtripError {
    /// `encode` produced a different number of chars than it was given.
    LengthChanged {
        input: String,
        encoded: String,
        input_len: usize,
        encoded_len: usize,
    },
    /// `decode(encode(input))` is not `input`.
    NotInverse {
        input: String,
        encoded: String,
        decoded: String,
    },
}

impl fmt::Display for RoundtripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundtripError::LengthChanged {
                input,
                encoded,
                input_len,
                encoded_len,
            } => {
                write!(
                    f,
                    "encode({:?}) = {:?} has {} chars, expected {}",
                    input, encoded, encoded_len, input_len
                )
            }
            RoundtripError::NotInverse {
                input,
                encoded,
                decoded,
            } => {
                write!(
                    f,
                    "decode({:?}) = {:?}, expected {:?}",
                    encoded, decoded, input
                )
            }
        }
    }
}

impl std::error::Error for RoundtripError {}

/// Encode `input`, decode the result, and compare.
///
/// Returns the encoded text on success so callers can reuse it.
pub fn check_roundtrip(input: &str) -> Result<String, RoundtripError> {
    let encoded = encode(input);

    let input_len = input.chars().count();
    let encoded_len = encoded.chars().count();
    if input_len != encoded_len {
        return Err(RoundtripError::LengthChanged {
            input: input.to_string(),
            encoded,
            input_len,
            encoded_len,
        });
    }

    let decoded = decode(&encoded);
    if decoded != input {
        return Err(RoundtripError::NotInverse {
            input: input.to_string(),
            encoded,
            decoded,
        });
    }

    let original: Vec<char> = input.chars().collect();
    let shuffled: Vec<char> = encoded.chars().collect();
    super::contracts::check_same_elements(&original, &shuffled);

    Ok(encoded)
}
