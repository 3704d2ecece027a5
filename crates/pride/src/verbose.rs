// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output for diagnostic information.
//!
//! Lines go through the harness logger on the VERBOSE channel. Enabled with
//! `--verbose`.

use std::path::Path;

use crate::config::Settings;
use crate::log::Logger;
use crate::severity::Severity;

/// Verbose output logger. All output is conditional on verbose mode.
pub struct VerboseLogger<'a> {
    logger: &'a Logger,
    enabled: bool,
}

impl<'a> VerboseLogger<'a> {
    pub fn new(enabled: bool, logger: &'a Logger) -> Self {
        Self { logger, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line (indented as content under a section).
    pub fn log(&self, msg: &str) {
        if self.enabled {
            let _ = self.logger.verbose(format_args!("  {msg}\n"));
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            let _ = self.logger.verbose(format_args!("\n{title}:\n"));
        }
    }
}

/// Describe the effective configuration.
pub fn configuration(verbose: &VerboseLogger<'_>, source: Option<&Path>, settings: &Settings) {
    if !verbose.is_enabled() {
        return;
    }
    verbose.section("Configuration");
    match source {
        Some(path) => verbose.log(&format!("Config: {}", path.display())),
        None => verbose.log("Config: (defaults)"),
    }
    verbose.log(&format!("Worker slots: {}", settings.unit.threads));
    verbose.log(&format!(
        "Color: {} (force on non-terminals: {})",
        settings.log.color, settings.log.force_color
    ));
    let on_stdout: Vec<&str> = Severity::ALL
        .iter()
        .filter(|s| settings.log.stdout.get(**s))
        .map(|s| s.key())
        .collect();
    if on_stdout.is_empty() {
        verbose.log("Stdout: (none)");
    } else {
        verbose.log(&format!("Stdout: {}", on_stdout.join(", ")));
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
