// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log line severities.

use std::fmt;

/// Classification of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Plain,
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    /// What a Terrible Failure.
    Wtf,
}

impl Severity {
    /// All severities, least to most severe.
    pub const ALL: [Severity; 7] = [
        Severity::Plain,
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Wtf,
    ];

    /// Key used in configuration files.
    pub fn key(self) -> &'static str {
        match self {
            Severity::Plain => "plain",
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Wtf => "wtf",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
