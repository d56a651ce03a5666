//! Custom cargo commands for the rearrange crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask kani      - Run Kani proofs (needs cargo-kani)
//!   cargo xtask fuzz      - Run each fuzz target briefly (needs cargo-fuzz, nightly)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["roundtrip", "decode_arbitrary"];

/// Seconds each fuzz target runs for in `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 30;

/// Minimum number of contract assertions expected in src/verify/contracts.rs.
const MIN_CONTRACTS: usize = 3;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests + clippy + kani)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  kani      Run Kani model checking proofs
  fuzz      Run each fuzz target for {FUZZ_SECONDS}s
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("rearrange Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs hold\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn kani() -> Result<()> {
    let root = project_root()?;
    run_cargo_in(&root.join("kani-proofs"), &["kani"])
}

fn fuzz() -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, FUZZ_SECONDS);
        run_cargo_in(&root, &["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    println!("\n✓ Fuzz targets found no crashes");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;
    run_cargo_in(&root, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed in {}", args, dir.display());
    }

    Ok(())
}

/// Make sure nobody quietly deleted the runtime contracts.
fn check_contract_markers() -> Result<()> {
    let path = project_root()?.join("src/verify/contracts.rs");
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let count = source.matches("Contract violation").count();
    if count < MIN_CONTRACTS {
        bail!(
            "Expected at least {} contract assertions, found {}. Someone may have removed safety checks!",
            MIN_CONTRACTS,
            count
        );
    }

    Ok(())
}
