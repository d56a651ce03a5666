// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The built-in scenario table behind `rearrange test`.
//!
//! Five literal cases. Each one must encode to the expected text and decode
//! back to the input. The report is plain data so the CLI can print it as a
//! table or hand it to `serde_json`.

use crate::cipher::{decode, encode};
use serde::Serialize;
use tracing::debug;

/// `(input, expected encoding)` pairs.
pub const SCENARIOS: &[(&str, &str)] = &[
    ("message", "msaeesg"),
    ("hello", "hloel"),
    ("abcd", "acbd"),
    ("a", "a"),
    ("", ""),
];

/// What happened to one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub input: String,
    pub expected: String,
    pub encoded: String,
    pub decoded: String,
    pub passed: bool,
}

impl CaseOutcome {
    /// Run one scenario.
    pub fn evaluate(input: &str, expected: &str) -> Self {
        let encoded = encode(input);
        let decoded = decode(&encoded);
        let passed = encoded == expected && decoded == input;
        debug!(input, %encoded, %decoded, passed, "scenario evaluated");
        Self {
            input: input.to_string(),
            expected: expected.to_string(),
            encoded,
            decoded,
            passed,
        }
    }
}

/// Outcomes for a whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub cases: Vec<CaseOutcome>,
    pub passed: bool,
}

impl Report {
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.cases.iter().filter(|c| !c.passed)
    }

    /// The closing line printed after the table.
    pub fn summary(&self) -> &'static str {
        if self.passed {
            "All tests passed."
        } else {
            "Some tests failed."
        }
    }
}

/// Run an arbitrary scenario table.
pub fn run_table(table: &[(&str, &str)]) -> Report {
    let cases: Vec<CaseOutcome> = table
        .iter()
        .map(|&(input, expected)| CaseOutcome::evaluate(input, expected))
        .collect();
    let mut report = Report {
        cases,
        passed: false,
    };
    let failed = report.failures().count();
    report.passed = failed == 0;
    debug!(total = report.cases.len(), failed, "scenario table finished");
    report
}

/// Run the built-in [`SCENARIOS`].
pub fn run() -> Report {
    run_table(SCENARIOS)
}
