//! Output routing and color behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > Piped output carries no prefix colors by default
#[test]
fn pipes_are_uncolored_by_default() {
    let dir = temp_project();
    pride_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b[32m").not())
        .stderr(predicates::str::contains("[✔]\t1 + 1 == 2\n\x1b[0m"));
}

/// > --color=always keeps prefix colors on pipes
#[test]
fn color_always_colors_pipes() {
    let dir = temp_project();
    pride_cmd()
        .args(["--color", "always"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b[32m\x1b[1m[✔]"));
}

/// > --no-color overrides --color=always
#[test]
fn no_color_wins_over_always() {
    let dir = temp_project();
    pride_cmd()
        .args(["--color", "always", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b[32m").not());
}

/// > NO_COLOR disables color like --no-color
#[test]
fn no_color_env_is_honored() {
    let dir = temp_project();
    pride_cmd()
        .args(["--color", "always"])
        .env("NO_COLOR", "1")
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b[32m").not());
}

/// > The summary line follows the configured color flags
#[test]
fn config_force_color_colors_summary_on_pipes() {
    let dir = temp_project_with_config("[log]\nforce_color = true\n");
    pride_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[1m"));
}

/// > The summary line is plain on pipes by default
#[test]
fn summary_is_uncolored_on_pipes_by_default() {
    let dir = temp_project();
    pride_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

/// > Verbose mode describes the configuration
#[test]
fn verbose_prints_configuration() {
    let dir = temp_project();
    pride_cmd()
        .args(["-v", "-j", "2"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("Configuration:"))
        .stderr(predicates::str::contains("Config: (defaults)"))
        .stderr(predicates::str::contains("Worker slots: 2"));
}
