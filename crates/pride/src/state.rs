// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! State shared between a scheduler and its running units.

use std::any::Any;

use parking_lot::RwLock;

use crate::config::UnitSettings;
use crate::counters::RunCounters;
use crate::log::Logger;
use crate::template;

pub(crate) struct RunState {
    pub(crate) logger: Logger,
    pub(crate) counters: RunCounters,
    pub(crate) unit: RwLock<UnitSettings>,
}

impl RunState {
    pub(crate) fn new(logger: Logger, unit: UnitSettings) -> Self {
        Self { logger, counters: RunCounters::default(), unit: RwLock::new(unit) }
    }

    /// Emit the unit-start line.
    pub(crate) fn announce(&self, label: &str) {
        let line = template::expand(&self.unit.read().unit_format, &[&label]);
        if let Err(e) = self.logger.plain(format_args!("{line}")) {
            tracing::debug!(unit = label, "unit start line not written: {}", e);
        }
    }

    /// Report a unit that panicked or never started.
    pub(crate) fn unit_aborted(&self, label: &str, reason: &str) {
        self.counters.unit_aborted();
        tracing::warn!(unit = label, "unit aborted: {}", reason);
        if let Err(e) = self.logger.wtf(format_args!("unit `{label}` aborted: {reason}\n")) {
            tracing::debug!(unit = label, "abort line not written: {}", e);
        }
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panicked".to_string()
    }
}
