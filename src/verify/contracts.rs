// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the permutation.
//!
//! Debug-mode assertions, compiled out of release builds. They check the
//! properties the encoder and decoder promise:
//!
//! | Contract                    | Property                                   |
//! |-----------------------------|--------------------------------------------|
//! | `check_layout_balanced`     | `even + odd == n`, `even - odd` is 0 or 1  |
//! | `check_length_preserved`    | output length equals input length          |
//! | `check_same_elements`       | output is a reordering of the input        |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! The encoder and decoder call the first two on every invocation. The third
//! needs `Ord` and a sort, so only the roundtrip checker calls it.

use crate::layout::Layout;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    assert!(Layout::new(0).is_balanced());
    assert!(Layout::new(1).is_balanced());
    assert!(Layout::new(7).even_count() == 4);
    assert!(Layout::new(7).odd_count() == 3);
    assert!(Layout::new(usize::MAX).is_balanced());
};

// ============================================================================
// LAYOUT CONTRACTS
// ============================================================================

/// Check that the parity groups of a layout are balanced.
///
/// # Panics (debug builds only)
/// Panics if the groups do not add up to the length, or the even group is
/// shorter than the odd group, or longer by more than one.
#[inline]
pub fn check_layout_balanced(layout: Layout) {
    debug_assert!(
        layout.is_balanced(),
        "Contract violation: layout balance - even {} + odd {} vs len {}",
        layout.even_count(),
        layout.odd_count(),
        layout.len()
    );
}

// ============================================================================
// OUTPUT CONTRACTS
// ============================================================================

/// Check that a transform did not change the sequence length.
#[inline]
pub fn check_length_preserved(input_len: usize, output_len: usize) {
    debug_assert_eq!(
        input_len, output_len,
        "Contract violation: length preserved - input {} != output {}",
        input_len, output_len
    );
}

/// Check that `output` holds exactly the elements of `input`, in any order.
///
/// # Panics (debug builds only)
/// Panics if an element was created, dropped or altered.
#[inline]
pub fn check_same_elements<T: Ord + Clone + std::fmt::Debug>(input: &[T], output: &[T]) {
    if cfg!(debug_assertions) {
        let mut a = input.to_vec();
        let mut b = output.to_vec();
        a.sort();
        b.sort();
        debug_assert!(
            a == b,
            "Contract violation: same elements - {:?} is not a reordering of {:?}",
            output,
            input
        );
    }
}
