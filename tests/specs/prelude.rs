//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command for the pride binary, isolated from the caller's
/// color and config environment.
pub fn pride_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pride"));
    cmd.env_remove("NO_COLOR")
        .env_remove("PRIDE_CONFIG")
        .env_remove("PRIDE_LOG");
    cmd
}

/// Creates an empty working directory.
pub fn temp_project() -> TempDir {
    TempDir::new().unwrap()
}

/// Creates a working directory containing `pride.toml`.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pride.toml"), config).unwrap();
    dir
}
