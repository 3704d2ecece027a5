// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion recording.

use crate::severity::Severity;
use crate::state::RunState;
use crate::template;

impl RunState {
    /// Count one assertion and emit its pass (INFO) or fail (ERROR) line.
    ///
    /// Never fails: a line that cannot be written is dropped.
    pub(crate) fn record(&self, message: &str, passed: bool) {
        self.counters.assertion(passed);

        let line = {
            let unit = self.unit.read();
            let glyph = if passed { &unit.passed } else { &unit.failed };
            template::expand(&unit.assertion_format, &[glyph, &message])
        };
        let severity = if passed { Severity::Info } else { Severity::Error };
        if let Err(e) = self.logger.emit(severity, format_args!("{line}")) {
            tracing::debug!("assertion line not written: {}", e);
        }
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
