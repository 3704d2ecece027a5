// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run counters shared by the scheduler and every running unit.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters for one scheduler.
///
/// Increments are relaxed; a join (on slot reuse or drain) orders them before
/// anything the submitting thread reads afterwards.
#[derive(Debug, Default)]
pub struct RunCounters {
    /// Units run inline. Threaded dispatch does not count here.
    units: AtomicU64,
    /// Assertions since the last inline unit started.
    assertions: AtomicU64,
    passed: AtomicU64,
    failed: AtomicU64,
    submitted: AtomicU64,
    aborted: AtomicU64,
}

/// Point-in-time copy of [`RunCounters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Units run inline.
    pub unit_count: u64,
    /// Assertions recorded; reset when an inline unit starts.
    pub assertion_count: u64,
    pub assertion_passed_count: u64,
    pub assertion_failed_count: u64,
    /// Every unit handed to `submit`, inline or threaded.
    pub units_submitted: u64,
    /// Units that panicked or could not be started.
    pub units_aborted: u64,
}

impl RunStats {
    /// Whether any assertion failed or any unit aborted.
    pub fn has_failures(&self) -> bool {
        self.assertion_failed_count > 0 || self.units_aborted > 0
    }
}

impl RunCounters {
    pub fn snapshot(&self) -> RunStats {
        RunStats {
            unit_count: self.units.load(Ordering::Relaxed),
            assertion_count: self.assertions.load(Ordering::Relaxed),
            assertion_passed_count: self.passed.load(Ordering::Relaxed),
            assertion_failed_count: self.failed.load(Ordering::Relaxed),
            units_submitted: self.submitted.load(Ordering::Relaxed),
            units_aborted: self.aborted.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn unit_submitted(&self) {
        self.submitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Inline unit start: counts the unit and resets the assertion count.
    pub(crate) fn inline_unit_started(&self) {
        self.units.fetch_add(1, Ordering::Relaxed);
        self.assertions.store(0, Ordering::Relaxed);
    }

    pub(crate) fn unit_aborted(&self) {
        self.aborted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn assertion(&self, passed: bool) {
        self.assertions.fetch_add(1, Ordering::Relaxed);
        if passed {
            self.passed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
#[path = "counters_tests.rs"]
mod tests;
