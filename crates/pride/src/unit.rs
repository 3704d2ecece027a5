// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! What a running unit sees.

use std::sync::Arc;

use crate::log::Logger;
use crate::state::RunState;

/// Handle passed to every unit body.
///
/// Carries the unit's label and lets the body record assertions and log
/// through the scheduler that runs it.
pub struct UnitContext {
    label: String,
    state: Arc<RunState>,
}

impl UnitContext {
    pub(crate) fn new(label: &str, state: Arc<RunState>) -> Self {
        Self { label: label.to_string(), state }
    }

    /// Label given at submission.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Record an assertion. See [`check!`](crate::check) for the macro form.
    pub fn check(&self, message: &str, passed: bool) {
        self.state.record(message, passed);
    }

    /// The scheduler's logger.
    pub fn logger(&self) -> &Logger {
        &self.state.logger
    }

    pub(crate) fn aborted(&self, reason: &str) {
        self.state.unit_aborted(&self.label, reason);
    }
}

/// Record a boolean assertion, using the expression text as the message.
///
/// ```
/// # let scheduler = pride::Scheduler::new();
/// scheduler.submit("math", |t| {
///     pride::check!(t, 1 + 1 == 2);
///     pride::check!(t, 2 + 2 == 4, "sum of {} and {}", 2, 2);
/// });
/// ```
#[macro_export]
macro_rules! check {
    ($ctx:expr, $cond:expr $(,)?) => {
        $ctx.check(::std::stringify!($cond), $cond)
    };
    ($ctx:expr, $cond:expr, $($arg:tt)+) => {
        $ctx.check(&::std::format!($($arg)+), $cond)
    };
}
