// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types.

use thiserror::Error;

use crate::severity::Severity;

/// Rejected configuration change.
///
/// Returned by setters instead of applying an out-of-range value; the previous
/// value stays in effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{severity} prefix is {len} bytes (limit {max})")]
    PrefixTooLong { severity: Severity, len: usize, max: usize },

    #[error("{name} is {len} bytes (limit {max})")]
    TemplateTooLong { name: &'static str, len: usize, max: usize },

    #[error("{requested} worker slots requested (limit {max})")]
    TooManyWorkers { requested: usize, max: usize },

    #[error("cannot resize worker pool while {occupied} slot(s) are still running")]
    PoolBusy { occupied: usize },
}
