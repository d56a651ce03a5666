// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::debug;

use rearrange::{decode, encode, selftest};

mod cli;
use cli::display;
use cli::{Cli, Mode, UsageError};

/// Exit status for bad or missing input, matching clap's own usage errors.
const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            if let Some(usage) = err.downcast_ref::<UsageError>() {
                eprintln!("error: {}", usage);
                eprintln!();
                eprintln!("For more information, try '--help'.");
                ExitCode::from(USAGE_EXIT)
            } else {
                eprintln!("❌ {:#}", err);
                ExitCode::FAILURE
            }
        }
    }
}

/// Initialize tracing with `RUST_LOG`, falling back to `warn` (or `debug` with `-v`).
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mode = cli.mode()?;
    debug!(?mode, "mode selected");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match mode {
        Mode::Encrypt(text) => {
            writeln!(out, "{}", encode(&text)).context("failed to write to stdout")?;
        }
        Mode::Decrypt(text) => {
            writeln!(out, "{}", decode(&text)).context("failed to write to stdout")?;
        }
        Mode::Test { json } => {
            let passed = run_self_test(&mut out, json, display::use_colors())?;
            if !passed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Mode::Interactive => {
            let stdin = io::stdin();
            interactive(&mut stdin.lock(), &mut out)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print the scenario table (or its JSON form). Returns whether every case passed.
fn run_self_test(out: &mut impl Write, json: bool, colors: bool) -> Result<bool> {
    let report = selftest::run();

    if json {
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        writeln!(out, "{}", rendered).context("failed to write to stdout")?;
    } else {
        for line in display::report_lines(&report, colors) {
            writeln!(out, "{}", line).context("failed to write to stdout")?;
        }
    }

    Ok(report.passed)
}

/// Prompt for one line, then show it encrypted and decrypted back.
fn interactive(input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Rearrange Cipher Interactive Demo")?;
    write!(out, "Enter a message to encrypt: ")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        // Keep the prompt from running into the shell prompt.
        writeln!(out)?;
        return Err(UsageError("no message provided on stdin".to_string()).into());
    }
    let message = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line.as_str());

    let encrypted = encode(message);
    writeln!(out, "Encrypted: {}", encrypted)?;
    writeln!(out, "Decrypted back: {}", decode(&encrypted))?;
    Ok(())
}
