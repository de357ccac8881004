//! Custom cargo commands for sitefind.
//!
//! Usage:
//!   cargo xtask verify      - Run full verification suite
//!   cargo xtask test        - Run all tests
//!   cargo xtask check       - Quick check (check + test + clippy)
//!   cargo xtask bench       - Run benchmarks
//!   cargo xtask build-wasm  - Build the browser bundle into pkg/
//!   cargo xtask fuzz <t>    - Run one fuzz target (nightly)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Glue file that implements the host objects in the browser.
const HOST_JS: &str = "assets/sitefind-host.js";
/// Rust side of that contract.
const WASM_RS: &str = "src/runtime/wasm.rs";
/// Binaries declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["escape_html", "index_parse", "substring_match"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("build-wasm") => build_wasm()?,
        Some("fuzz") => {
            let Some(target) = env::args().nth(2) else {
                bail!("usage: cargo xtask fuzz <target>");
            };
            fuzz(&target)?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify      Run full verification suite (tests + clippy + wasm + host contract)
  test        Run all Rust tests
  check       Quick check (cargo check + test + clippy)
  bench       Run benchmarks
  build-wasm  Build the browser bundle with wasm-pack
  fuzz <t>    Run a fuzz target ({})
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("sitefind Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-features", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/4] Checking the wasm build...");
    run_cargo(&[
        "check",
        "--quiet",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--features",
        "wasm",
    ])?;
    println!("✓ wasm target builds\n");

    println!("[4/4] Verifying JS host contract...");
    verify_host_contract()?;
    println!("✓ Host glue implements every method\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
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

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Build pkg/ with wasm-pack and copy the host glue next to it.
fn build_wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--target",
            "web",
            "--release",
            "--out-dir",
            "pkg",
            "--",
            "--features",
            "wasm",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    std::fs::copy(root.join(HOST_JS), root.join("pkg/sitefind-host.js"))
        .context("Failed to copy host glue into pkg/")?;
    println!("✓ Bundle written to pkg/");
    Ok(())
}

/// Run a fuzz target for a minute.
fn fuzz(target: &str) -> Result<()> {
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target {}, expected one of: {}", target, FUZZ_TARGETS.join(", "));
    }
    let root = project_root()?;
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

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

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every host method the Rust side calls must exist in the JS glue.
fn verify_host_contract() -> Result<()> {
    let root = project_root()?;

    let wasm_rs = std::fs::read_to_string(root.join(WASM_RS))
        .with_context(|| format!("Failed to read {}", WASM_RS))?;
    let host_js = std::fs::read_to_string(root.join(HOST_JS))
        .with_context(|| format!("Failed to read {}", HOST_JS))?;

    let methods = extract_host_methods(&wasm_rs);
    if methods.is_empty() {
        bail!("No host method calls found in {}", WASM_RS);
    }

    let missing: Vec<&String> = methods
        .iter()
        .filter(|m| !host_js.contains(&format!("{}(", m)))
        .collect();

    if !missing.is_empty() {
        bail!("{} is missing host methods: {:?}", HOST_JS, missing);
    }

    println!("  {} host methods checked", methods.len());
    Ok(())
}

/// Pull `"methodName"` out of every `.call("methodName", ...)` line.
fn extract_host_methods(content: &str) -> Vec<String> {
    let mut methods = Vec::new();
    for line in content.lines() {
        let Some(rest) = line.split(".call(\"").nth(1) else {
            continue;
        };
        if let Some(name) = rest.split('"').next() {
            if !methods.iter().any(|m| m == name) {
                methods.push(name.to_string());
            }
        }
    }
    methods
}
