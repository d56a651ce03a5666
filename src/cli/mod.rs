// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rearrange command-line interface.
//!
//! Three subcommands: `encrypt`, `decrypt` and `test`. The older flag form
//! (`-e TEXT`, `-d TEXT`, `--test`) is still accepted and maps onto the same
//! modes. When several flags are given, `--test` wins over `-e`, and `-e`
//! wins over `-d`. With no mode at all the binary runs an interactive demo.

pub mod display;

use clap::{Parser, Subcommand};
use std::fmt;

#[derive(Parser, Debug)]
#[command(
    name = "rearrange",
    about = "Encrypt/decrypt by even-then-odd reordering",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Encrypt the given string
    #[arg(short = 'e', long = "encrypt", value_name = "TEXT")]
    pub encrypt: Option<String>,

    /// Decrypt the given string (produced by this method)
    #[arg(short = 'd', long = "decrypt", value_name = "TEXT")]
    pub decrypt: Option<String>,

    /// Run built-in tests
    #[arg(long)]
    pub test: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Encrypt a string and print the result
    Encrypt {
        /// Text to encrypt
        text: String,
    },

    /// Decrypt a string produced by `encrypt`
    Decrypt {
        /// Text to decrypt
        text: String,
    },

    /// Run the built-in scenario table
    Test {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// What the binary should do, after folding flags and subcommands together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Encrypt(String),
    Decrypt(String),
    Test { json: bool },
    Interactive,
}

/// Bad or missing input. Reported on stderr with exit status 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError(pub String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UsageError {}

impl Cli {
    fn has_mode_flag(&self) -> bool {
        self.test || self.encrypt.is_some() || self.decrypt.is_some()
    }

    pub fn mode(&self) -> Result<Mode, UsageError> {
        if let Some(command) = &self.command {
            if self.has_mode_flag() {
                return Err(UsageError(
                    "-e/--encrypt, -d/--decrypt and --test cannot be combined with a subcommand"
                        .to_string(),
                ));
            }
            return Ok(match command.clone() {
                Commands::Encrypt { text } => Mode::Encrypt(text),
                Commands::Decrypt { text } => Mode::Decrypt(text),
                Commands::Test { json } => Mode::Test { json },
            });
        }
        Ok(if self.test {
            Mode::Test { json: false }
        } else if let Some(text) = &self.encrypt {
            Mode::Encrypt(text.clone())
        } else if let Some(text) = &self.decrypt {
            Mode::Decrypt(text.clone())
        } else {
            Mode::Interactive
        })
    }
}
