// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The permutation layout: where every element goes, and where it came from.
//!
//! A sequence of length `n` splits into two groups by index parity. The even
//! group (positions 0, 2, 4, ...) is written first, the odd group (1, 3, 5, ...)
//! after it. Nothing else is needed to describe the permutation, so a layout is
//! just the length plus a couple of index formulas.
//!
//! ```text
//!   original   m  e  s  s  a  g  e        n = 7
//!   position   0  1  2  3  4  5  6
//!              │     │     │     │
//!   encoded    m  s  a  e  e  s  g        even_count = 4, odd_count = 3
//!              └── even ──┘ └ odd ┘
//! ```
//!
//! The even group is never shorter than the odd group, and at most one longer.
//! Both counts come from `n` alone, which is what lets the decoder work
//! without being told the original length.

/// Partition sizes and index mapping for a sequence of a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    len: usize,
}

impl Layout {
    /// Layout for a sequence of `len` elements.
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Total number of elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the even group: `ceil(n / 2)`.
    ///
    /// Written as `n / 2 + n % 2` so `usize::MAX` does not overflow.
    pub const fn even_count(&self) -> usize {
        self.len / 2 + self.len % 2
    }

    /// Size of the odd group: `floor(n / 2)`.
    pub const fn odd_count(&self) -> usize {
        self.len / 2
    }

    /// Original position of the element found at encoded position `encoded`.
    ///
    /// Returns `None` when `encoded >= len`.
    pub const fn source_index(&self, encoded: usize) -> Option<usize> {
        if encoded >= self.len {
            return None;
        }
        let even = self.even_count();
        if encoded < even {
            Some(encoded * 2)
        } else {
            Some((encoded - even) * 2 + 1)
        }
    }

    /// Encoded position of the element found at original position `original`.
    ///
    /// Returns `None` when `original >= len`.
    pub const fn encoded_index(&self, original: usize) -> Option<usize> {
        if original >= self.len {
            return None;
        }
        if original % 2 == 0 {
            Some(original / 2)
        } else {
            Some(self.even_count() + original / 2)
        }
    }

    /// Whether the parity groups satisfy the balance invariant.
    ///
    /// Always true for layouts built by [`Layout::new`]; exposed for the
    /// runtime contracts and the property tests.
    pub const fn is_balanced(&self) -> bool {
        let even = self.even_count();
        let odd = self.odd_count();
        even + odd == self.len && (even == odd || even == odd + 1)
    }
}

impl From<usize> for Layout {
    fn from(len: usize) -> Self {
        Self::new(len)
    }
}
