// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts and a roundtrip checker.
//!
//! 1. **Runtime contracts** panic in debug builds when the permutation breaks
//!    its promises. Zero-cost in release.
//!
//! 2. **`check_roundtrip`** runs the inverse law on one input and hands back a
//!    `RoundtripError` instead of panicking.
//!
//! The bounded proofs live in the standalone `kani-proofs` crate, and the fuzz
//! targets in `fuzz/`.

pub mod contracts;
mod types;

pub use types::*;
