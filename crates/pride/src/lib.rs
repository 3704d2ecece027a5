// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pride: a minimal threaded unit testing harness with colored logging.
//!
//! A [`Scheduler`] runs named units either inline or across a rotating set of
//! worker slots. Units record boolean assertions through their
//! [`UnitContext`]; every assertion updates shared counters and prints a
//! pass/fail line through the [`Logger`].
//!
//! ```
//! use pride::{Scheduler, check};
//!
//! let scheduler = Scheduler::new();
//! scheduler.submit("arithmetic", |t| {
//!     check!(t, 1 + 1 == 2);
//!     pride::info!(t.logger(), "checked {}\n", t.label()).ok();
//! });
//! assert_eq!(scheduler.stats().assertion_passed_count, 1);
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod counters;
pub mod demo;
pub mod error;
pub mod format;
pub mod log;
mod recorder;
pub mod scheduler;
pub mod severity;
pub mod sgr;
mod state;
pub mod stream;
pub mod template;
pub mod unit;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;

pub use config::Settings;
pub use config::defaults::limits::{MAX_PREFIX_LEN, MAX_TEMPLATE_LEN, MAX_THREAD_NUM};
pub use counters::RunStats;
pub use error::ConfigError;
pub use log::Logger;
pub use scheduler::{Phase, Scheduler};
pub use severity::Severity;
pub use stream::{MemoryStreams, StdStreams, Streams, Target};
pub use unit::UnitContext;
