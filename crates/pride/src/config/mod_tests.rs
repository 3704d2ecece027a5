// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for configuration parsing and limits.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use yare::parameterized;

use super::*;
use crate::sgr;
use crate::test_utils::temp_file_with_content;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn defaults_route_everything_to_stderr() {
    let log = LogSettings::default();
    for severity in Severity::ALL {
        assert!(!log.stdout.get(severity), "{severity} should default to stderr");
    }
}

#[test]
fn default_prefixes_use_palette() {
    let prefix = Prefixes::default();
    assert_eq!(prefix.get(Severity::Plain), sgr::RESET);
    assert_eq!(prefix.get(Severity::Debug), sgr::BLUE);
    assert_eq!(prefix.get(Severity::Info), format!("{}{}", sgr::GREEN, sgr::BOLD));
    assert_eq!(prefix.get(Severity::Warn), format!("{}{}", sgr::YELLOW, sgr::BOLD));
    assert_eq!(prefix.get(Severity::Error), format!("{}{}", sgr::RED, sgr::BOLD));
    assert_eq!(prefix.get(Severity::Wtf), prefix.get(Severity::Error));
}

#[test]
fn default_unit_settings_run_inline() {
    let unit = UnitSettings::default();
    assert_eq!(unit.threads, 0);
    assert_eq!(unit.passed, "✔");
    assert_eq!(unit.failed, "✘");
}

#[test]
fn default_settings_validate() {
    Settings::default().validate().unwrap();
}

// =============================================================================
// COLOR DECISION
// =============================================================================

#[parameterized(
    tty_color = { true, true, false, true },
    tty_no_color = { true, false, true, false },
    pipe_default = { false, true, false, false },
    pipe_forced = { false, true, true, true },
    pipe_forced_without_color = { false, false, true, true },
)]
fn colorize_follows_terminal_and_flags(is_tty: bool, color: bool, force: bool, expected: bool) {
    let log = LogSettings { color, force_color: force, ..LogSettings::default() };
    assert_eq!(log.colorize(is_tty), expected);
}

// =============================================================================
// LIMITS
// =============================================================================

#[test]
fn prefix_at_limit_is_accepted() {
    let mut prefix = Prefixes::default();
    let at_limit = "p".repeat(64);
    prefix.set(Severity::Info, &at_limit).unwrap();
    assert_eq!(prefix.get(Severity::Info), at_limit);
}

#[test]
fn prefix_over_limit_is_rejected_and_kept() {
    let mut prefix = Prefixes::default();
    let err = prefix.set(Severity::Warn, &"p".repeat(65)).unwrap_err();
    assert_eq!(
        err,
        ConfigError::PrefixTooLong { severity: Severity::Warn, len: 65, max: 64 }
    );
    assert_eq!(prefix.get(Severity::Warn), defaults::prefix::WARN);
}

#[test]
fn template_over_limit_is_rejected() {
    let mut unit = UnitSettings::default();
    let err = unit.set_unit_format(&"t".repeat(257)).unwrap_err();
    assert!(matches!(err, ConfigError::TemplateTooLong { name: "unit_format", .. }));
    assert_eq!(unit.unit_format, defaults::unit::UNIT_FORMAT);
}

#[test]
fn glyphs_are_replaced_together() {
    let mut unit = UnitSettings::default();
    unit.set_glyphs("ok", "FAIL").unwrap();
    assert_eq!((unit.passed.as_str(), unit.failed.as_str()), ("ok", "FAIL"));

    assert!(unit.set_glyphs("fine", &"x".repeat(300)).is_err());
    assert_eq!(unit.passed, "ok");
}

#[test]
fn thread_limit_is_enforced() {
    check_threads(256).unwrap();
    assert_eq!(
        check_threads(257).unwrap_err(),
        ConfigError::TooManyWorkers { requested: 257, max: 256 }
    );
}

// =============================================================================
// TOML
// =============================================================================

#[test]
fn parse_empty_document_yields_defaults() {
    assert_eq!(parse("").unwrap(), Settings::default());
}

#[test]
fn parse_overrides_selected_values() {
    let settings = parse(
        r#"
[log]
color = false
force_color = true

[log.stdout]
info = true
error = true

[log.prefix]
debug = "dbg "

[unit]
threads = 4
passed = "ok"
"#,
    )
    .unwrap();

    assert!(!settings.log.color);
    assert!(settings.log.force_color);
    assert!(settings.log.stdout.get(Severity::Info));
    assert!(settings.log.stdout.get(Severity::Error));
    assert!(!settings.log.stdout.get(Severity::Warn));
    assert_eq!(settings.log.prefix.get(Severity::Debug), "dbg ");
    assert_eq!(settings.log.prefix.get(Severity::Info), defaults::prefix::INFO);
    assert_eq!(settings.unit.threads, 4);
    assert_eq!(settings.unit.passed, "ok");
    assert_eq!(settings.unit.failed, "✘");
}

#[test]
fn parse_rejects_unknown_keys() {
    assert!(parse("[unit]\nworkers = 2\n").is_err());
}

#[test]
fn parse_rejects_oversized_pool() {
    let err = parse("[unit]\nthreads = 1000\n").unwrap_err();
    assert!(err.to_string().contains("1000 worker slots"));
}

#[test]
fn load_reads_file() {
    let file = temp_file_with_content("[unit]\nthreads = 2\n");
    assert_eq!(load(file.path()).unwrap().unit.threads, 2);
}

#[test]
fn load_reports_path_on_error() {
    let file = temp_file_with_content("[log]\ncolor = \"yes\"\n");
    let err = load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn load_missing_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(load(&dir.path().join("absent.toml")).is_err());
}
