// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reversible even/odd transposition cipher.
//!
//! Take the characters at even positions, then the characters at odd
//! positions, and glue them together. Undo it by splitting at `ceil(n/2)` and
//! interleaving. That is the whole cipher. It hides nothing from anyone who
//! tries, and it is not meant to.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  layout.rs  │────▶│  cipher.rs   │────▶│ selftest.rs  │
//! │  (Layout,   │     │ (encode,     │     │ (SCENARIOS,  │
//! │ even/odd)   │     │  decode)     │     │  Report)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify/                         │
//! │  (runtime contracts, check_roundtrip)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use rearrange::{decode, encode};
//!
//! let secret = encode("message");
//! assert_eq!(secret, "msaeesg");
//! assert_eq!(decode(&secret), "message");
//! ```
//!
//! The same permutation works on any slice:
//!
//! ```
//! use rearrange::{decode_slice, encode_slice};
//!
//! let encoded = encode_slice(&[1, 2, 3, 4, 5]);
//! assert_eq!(encoded, vec![1, 3, 5, 2, 4]);
//! assert_eq!(decode_slice(&encoded), vec![1, 2, 3, 4, 5]);
//! ```

mod cipher;
mod layout;
pub mod selftest;
pub mod testing;
pub mod verify;

pub use cipher::{decode, decode_slice, encode, encode_slice};
pub use layout::Layout;
pub use verify::{check_roundtrip, RoundtripError};
