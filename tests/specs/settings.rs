//! Configuration file behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > pride.toml in the working directory is picked up
#[test]
fn config_in_cwd_routes_info_to_stdout() {
    let dir = temp_project_with_config("[log.stdout]\ninfo = true\n");
    pride_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("[✔]\t1 + 1 == 2"))
        .stderr(predicates::str::contains("[✔]").not());
}

/// > Custom glyphs and templates replace the defaults
#[test]
fn custom_glyphs_are_used() {
    let dir = temp_project_with_config(
        "[unit]\npassed = \"PASS\"\nfailed = \"FAIL\"\nunit_format = \"## %s\\n\"\n",
    );
    pride_cmd()
        .arg("--fail")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("## arithmetic\n"))
        .stderr(predicates::str::contains("[PASS]\t"))
        .stderr(predicates::str::contains("[FAIL]\tone plus one is three"));
}

/// > --config points at an explicit file
#[test]
fn explicit_config_flag() {
    let dir = temp_project_with_config("");
    std::fs::write(dir.path().join("alt.toml"), "[unit]\nthreads = 2\n").unwrap();
    pride_cmd()
        .args(["-v", "--config", "alt.toml"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("Config: alt.toml"))
        .stderr(predicates::str::contains("Worker slots: 2"));
}

/// > Invalid config files are reported with their path
#[test]
fn invalid_config_is_an_error() {
    let dir = temp_project_with_config("[unit]\nthreads = \"many\"\n");
    pride_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("pride.toml"));
}

/// > Prefixes longer than 64 bytes are rejected
#[test]
fn oversized_prefix_is_an_error() {
    let prefix = "x".repeat(65);
    let dir = temp_project_with_config(&format!("[log.prefix]\ninfo = \"{prefix}\"\n"));
    pride_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("info prefix is 65 bytes"));
}
