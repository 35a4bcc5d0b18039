use std::process::Command;

use anyhow::{Context, Result};

const PACKAGES: &[&str] = &["younegotiate-domain", "younegotiate-core", "younegotiate-infra"];

const DOMAIN_FEATURE_COMBINATIONS: &[&[&str]] = &[
    &[], // default
    &["ts-gen"],
];

/// Check that every crate compiles on its own and that the domain feature
/// combinations compile.
pub fn test_feature_matrix() -> Result<()> {
    for package in PACKAGES {
        println!("\ncargo check -p {package}");
        check(package, None)?;
    }

    for features in DOMAIN_FEATURE_COMBINATIONS {
        if features.is_empty() {
            continue;
        }
        let joined = features.join(",");
        println!("\ncargo check -p younegotiate-domain --features {joined}");
        check("younegotiate-domain", Some(&joined))?;
        println!("✅ Features '{joined}' compiled successfully");
    }

    println!("\n✅ All crates and feature combinations compile successfully!");

    Ok(())
}

fn check(package: &str, features: Option<&str>) -> Result<()> {
    let mut command = Command::new("cargo");
    command.arg("check").arg("-p").arg(package);

    if let Some(feature_list) = features {
        command.arg("--features").arg(feature_list);
    }

    let label = features.unwrap_or("default");
    let status = command
        .status()
        .with_context(|| format!("Failed to run cargo check for {package} ({label})"))?;

    if !status.success() {
        anyhow::bail!("{package} with features '{label}' failed to compile");
    }

    Ok(())
}
