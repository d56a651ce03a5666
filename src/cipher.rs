// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Encoder and decoder.
//!
//! The slice functions do the work; the `str` functions collect `char`s, run
//! the slice version, and collect back into a `String`. A `char` is the unit of
//! permutation, so multi-byte text never gets split inside a code point.
//!
//! Both directions are total. `decode` takes whatever it is given and returns a
//! sequence of the same length; whether the result means anything depends on
//! the input having come out of `encode`.

use crate::layout::Layout;
use crate::verify::contracts::{check_layout_balanced, check_length_preserved};

/// Even-indexed elements in order, then odd-indexed elements in order.
pub fn encode_slice<T: Clone>(input: &[T]) -> Vec<T> {
    check_layout_balanced(Layout::new(input.len()));

    let mut output = Vec::with_capacity(input.len());
    output.extend(input.iter().step_by(2).cloned());
    output.extend(input.iter().skip(1).step_by(2).cloned());

    check_length_preserved(input.len(), output.len());
    output
}

/// Inverse of [`encode_slice`].
///
/// The split point is `ceil(n / 2)` where `n` is the encoded length. The front
/// part refills positions 0, 2, 4, ..., the back part refills 1, 3, 5, ....
pub fn decode_slice<T: Clone>(input: &[T]) -> Vec<T> {
    let layout = Layout::new(input.len());
    check_layout_balanced(layout);

    let (evens, odds) = input.split_at(layout.even_count());
    let mut output = Vec::with_capacity(input.len());
    let mut odds = odds.iter();
    for even in evens {
        output.push(even.clone());
        if let Some(odd) = odds.next() {
            output.push(odd.clone());
        }
    }

    check_length_preserved(input.len(), output.len());
    output
}

/// Encode a string by `char` position.
///
/// ```
/// assert_eq!(rearrange::encode("message"), "msaeesg");
/// ```
pub fn encode(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    encode_slice(&chars).into_iter().collect()
}

/// Decode a string produced by [`encode`].
///
/// ```
/// assert_eq!(rearrange::decode("msaeesg"), "message");
/// ```
pub fn decode(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    decode_slice(&chars).into_iter().collect()
}
