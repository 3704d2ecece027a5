//! Run behavior: exit codes, summaries, worker pools.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > A run with only passing assertions exits 0 and prints a summary
#[test]
fn passing_suite_exits_zero() {
    let dir = temp_project();
    pride_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("5 units, 14 assertions: 14 passed, 0 failed\n");
}

/// > Any failed assertion makes the exit code non-zero
#[test]
fn failing_assertion_exits_nonzero() {
    let dir = temp_project();
    pride_cmd()
        .arg("--fail")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicates::str::contains("1 failed"))
        .stderr(predicates::str::contains("[✘]\tone plus one is three"));
}

/// > Every unit announces itself before running
#[test]
fn unit_start_lines_are_printed() {
    let dir = temp_project();
    pride_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("---\tStart testing: arithmetic\n"))
        .stderr(predicates::str::contains("---\tStart testing: escapes\n"));
}

/// > Threaded runs produce the same totals as inline runs
#[test]
fn threaded_run_has_same_totals() {
    let dir = temp_project();
    pride_cmd()
        .args(["--threads", "3"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("5 units, 14 assertions: 14 passed, 0 failed\n");
}

/// > Worker pools above 256 slots are rejected
#[test]
fn oversized_pool_is_an_error() {
    let dir = temp_project();
    pride_cmd()
        .args(["-j", "257"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("257 worker slots requested"));
}
