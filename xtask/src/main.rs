//! Development automation tasks for the `YouNegotiate` workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! intentionally used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;
use std::path::Path;
use std::process::{Command, ExitCode};
use std::{env, fs};

use anyhow::{anyhow, Context};

mod features;

const BINDINGS_DIR: &str = "crates/domain/bindings";

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("codegen") => run_codegen(),
        Some("test-features") => features::test_feature_matrix(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("YouNegotiate Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci             Run all CI checks (fmt, clippy, feature matrix, test)");
    println!("    fmt            Check Rust code formatting");
    println!("    clippy         Run Clippy lints");
    println!("    test           Run all tests");
    println!("    codegen        Generate TypeScript types for negotiation views");
    println!("    test-features  Verify younegotiate-domain feature matrix compiles");
    println!("    help           Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    println!("==> Step 1/4: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/4: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/4: Checking feature combinations...");
    features::test_feature_matrix()?;

    println!("\n==> Step 4/4: Running tests...");
    run_test()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

/// Check Rust code formatting
fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

/// Run Clippy lints
fn run_clippy() -> anyhow::Result<()> {
    cargo(&["clippy", "--workspace", "--all-targets", "--all-features"], "Clippy run failed. See output above.")
}

/// Run all workspace tests
fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace", "--all-features"], "Tests failed")
}

fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("{failure}");
    }

    Ok(())
}

/// Generate TypeScript types from the domain crate
fn run_codegen() -> anyhow::Result<()> {
    println!("==> Generating TypeScript types from Rust...\n");

    println!("Step 1/2: Running ts-gen tests to export bindings...");
    cargo(
        &["test", "-p", "younegotiate-domain", "--features", "ts-gen", "--lib"],
        "TypeScript generation tests failed",
    )?;

    let bindings_dir = Path::new(BINDINGS_DIR);
    if !bindings_dir.exists() {
        anyhow::bail!(
            "Bindings directory not found at {}. TypeScript generation may have failed.",
            bindings_dir.display()
        );
    }

    println!("\nStep 2/2: Generating index.ts...");
    generate_index_ts(bindings_dir)?;

    println!("\n✓ TypeScript type generation complete!");
    println!("  Generated files: {}", bindings_dir.display());

    Ok(())
}

/// Generate index.ts that exports all types
fn generate_index_ts(types_dir: &Path) -> anyhow::Result<()> {
    let index_path = types_dir.join("index.ts");

    let entries = fs::read_dir(types_dir).context("Failed to read bindings directory")?;

    let mut type_files: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|e| {
            let path = e.path();
            let stem = path.file_stem()?.to_str()?.to_string();
            let is_ts = path.extension()?.to_str()? == "ts";
            (is_ts && stem != "index").then_some(stem)
        })
        .collect();

    type_files.sort();

    let mut content = String::from(
        "// Auto-generated types from the YouNegotiate domain crate\n\
         // Generated by ts-rs via: cargo xtask codegen\n\
         // DO NOT EDIT MANUALLY - changes will be overwritten\n\n",
    );

    for type_name in &type_files {
        let _ = writeln!(content, "export type {{ {type_name} }} from './{type_name}';");
    }

    fs::write(&index_path, content)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    println!("  Generated index.ts with {} exports", type_files.len());

    Ok(())
}
