use crate::repo;
use anyhow::Result;
use std::process::{Command, Stdio};

/// Quality gate steps, in order. The release build runs last.
pub const STEPS: [(&str, &[&str]); 6] = [
    ("cargo fetch", &["fetch"]),
    ("cargo check --workspace", &["check", "--workspace"]),
    ("cargo test --workspace", &["test", "--workspace"]),
    ("cargo fmt --all -- --check", &["fmt", "--all", "--", "--check"]),
    (
        "cargo clippy --workspace --all-targets -- -D warnings",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    ),
    ("cargo build --release", &["build", "--release"]),
];

pub fn run(skip_release: bool) -> Result<()> {
    let root = repo::repo_root()?;
    for (label, args) in selected_steps(skip_release) {
        run_step(&root, label, args)?;
    }
    Ok(())
}

fn selected_steps(skip_release: bool) -> Vec<(&'static str, &'static [&'static str])> {
    let keep = if skip_release {
        STEPS.len() - 1
    } else {
        STEPS.len()
    };
    STEPS.iter().take(keep).copied().collect()
}

fn run_step(root: &std::path::Path, label: &str, args: &[&str]) -> Result<()> {
    eprintln!("==> {label}");
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{label} failed (status {status})");
    }
    Ok(())
}
