// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and fuzz targets.
//!
//! This module is always compiled but hidden from documentation. The oracles
//! here are deliberately naive: they build the permutation from scratch with
//! index arithmetic instead of iterator adaptors, so a bug in one is unlikely
//! to be the same bug as in the other.

#![doc(hidden)]

/// Encode by asking, for every position, whether it is even or odd.
pub fn oracle_encode<T: Clone>(input: &[T]) -> Vec<T> {
    let mut evens = Vec::new();
    let mut odds = Vec::new();
    for (i, item) in input.iter().enumerate() {
        if i % 2 == 0 {
            evens.push(item.clone());
        } else {
            odds.push(item.clone());
        }
    }
    evens.extend(odds);
    evens
}

/// Decode by the recipe: split at `ceil(n/2)`, then fill even slots, then odd slots.
pub fn oracle_decode<T: Clone>(input: &[T]) -> Vec<T> {
    let n = input.len();
    let even_count = (n + 1) / 2;
    let mut slots: Vec<Option<T>> = vec![None; n];

    let mut next = 0;
    let mut i = 0;
    while i < n {
        slots[i] = Some(input[next].clone());
        next += 1;
        i += 2;
    }

    next = even_count;
    i = 1;
    while i < n {
        slots[i] = Some(input[next].clone());
        next += 1;
        i += 2;
    }

    slots.into_iter().flatten().collect()
}

/// String form of [`oracle_encode`].
pub fn oracle_encode_str(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    oracle_encode(&chars).into_iter().collect()
}

/// String form of [`oracle_decode`].
pub fn oracle_decode_str(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    oracle_decode(&chars).into_iter().collect()
}

/// Sorted copy, for multiset comparisons.
pub fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut v = items.to_vec();
    v.sort();
    v
}
