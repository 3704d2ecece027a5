// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use super::*;
use crate::config::LogSettings;
use crate::stream::{MemoryStreams, Target};

fn capture() -> (Logger, Arc<MemoryStreams>) {
    let streams = Arc::new(MemoryStreams::new());
    let logger = Logger::with_streams(LogSettings::default(), streams.clone()).unwrap();
    (logger, streams)
}

#[test]
fn disabled_logger_prints_nothing() {
    let (logger, streams) = capture();
    let verbose = VerboseLogger::new(false, &logger);
    verbose.section("Configuration");
    verbose.log("anything");
    configuration(&verbose, None, &Settings::default());
    assert_eq!(streams.contents(Target::Stderr), "");
}

#[test]
fn section_and_log_are_indented() {
    let (logger, streams) = capture();
    let verbose = VerboseLogger::new(true, &logger);
    verbose.section("Run");
    verbose.log("4 units");
    assert_eq!(streams.contents(Target::Stderr), "\nRun:\n\x1b[0m  4 units\n\x1b[0m");
}

#[test]
fn configuration_lists_pool_and_routing() {
    let (logger, streams) = capture();
    let verbose = VerboseLogger::new(true, &logger);
    let mut settings = Settings::default();
    settings.unit.threads = 3;
    settings.log.stdout.set(Severity::Info, true);
    settings.log.stdout.set(Severity::Error, true);

    configuration(&verbose, Some(Path::new("pride.toml")), &settings);

    let out = streams.contents(Target::Stderr);
    assert!(out.contains("Config: pride.toml"));
    assert!(out.contains("Worker slots: 3"));
    assert!(out.contains("Stdout: info, error"));
}

#[test]
fn verbose_lines_follow_routing() {
    let (logger, streams) = capture();
    logger.set_stdout(Severity::Verbose, true);
    VerboseLogger::new(true, &logger).log("here");
    assert_eq!(streams.contents(Target::Stdout), "  here\n\x1b[0m");
}
