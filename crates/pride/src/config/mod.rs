// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration.
//!
//! Settings live in memory and are owned by the [`Logger`](crate::log::Logger)
//! (log settings) and the [`Scheduler`](crate::scheduler::Scheduler) (unit
//! settings). They can also be read from a `pride.toml`:
//!
//! ```toml
//! [log]
//! color = true
//! force_color = false
//!
//! [log.stdout]
//! info = true
//!
//! [log.prefix]
//! debug = "\u001b[36m"
//!
//! [unit]
//! threads = 4
//! passed = "ok"
//! failed = "FAIL"
//! ```

pub mod defaults;

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::severity::Severity;
use defaults::limits::{MAX_PREFIX_LEN, MAX_TEMPLATE_LEN, MAX_THREAD_NUM};

/// Complete harness configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub log: LogSettings,
    pub unit: UnitSettings,
}

impl Settings {
    /// Check every value against the hard limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()?;
        self.unit.validate()
    }
}

/// Load and validate settings from a TOML file.
pub fn load(path: &Path) -> anyhow::Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
}

/// Parse and validate settings from TOML text.
pub fn parse(content: &str) -> anyhow::Result<Settings> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

/// Logging sink configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Emit prefix colors on terminals.
    pub color: bool,

    /// Emit prefix colors on non-terminals too.
    pub force_color: bool,

    /// Severities routed to stdout instead of stderr.
    pub stdout: StreamRouting,

    /// Per-severity line prefixes.
    pub prefix: Prefixes,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            color: true,
            force_color: false,
            stdout: StreamRouting::default(),
            prefix: Prefixes::default(),
        }
    }
}

impl LogSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for severity in Severity::ALL {
            check_prefix(severity, self.prefix.get(severity))?;
        }
        Ok(())
    }

    /// Whether a line bound for a stream should keep its colors.
    pub fn colorize(&self, is_terminal: bool) -> bool {
        (is_terminal && self.color) || (!is_terminal && self.force_color)
    }
}

/// Stdout routing flag per severity. `false` means stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamRouting {
    pub plain: bool,
    pub verbose: bool,
    pub debug: bool,
    pub info: bool,
    pub warn: bool,
    pub error: bool,
    pub wtf: bool,
}

impl StreamRouting {
    pub fn get(&self, severity: Severity) -> bool {
        *self.slot(severity)
    }

    pub fn set(&mut self, severity: Severity, stdout: bool) {
        *self.slot_mut(severity) = stdout;
    }

    fn slot(&self, severity: Severity) -> &bool {
        match severity {
            Severity::Plain => &self.plain,
            Severity::Verbose => &self.verbose,
            Severity::Debug => &self.debug,
            Severity::Info => &self.info,
            Severity::Warn => &self.warn,
            Severity::Error => &self.error,
            Severity::Wtf => &self.wtf,
        }
    }

    fn slot_mut(&mut self, severity: Severity) -> &mut bool {
        match severity {
            Severity::Plain => &mut self.plain,
            Severity::Verbose => &mut self.verbose,
            Severity::Debug => &mut self.debug,
            Severity::Info => &mut self.info,
            Severity::Warn => &mut self.warn,
            Severity::Error => &mut self.error,
            Severity::Wtf => &mut self.wtf,
        }
    }
}

/// Line prefix per severity, usually an SGR sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Prefixes {
    pub plain: String,
    pub verbose: String,
    pub debug: String,
    pub info: String,
    pub warn: String,
    pub error: String,
    pub wtf: String,
}

impl Default for Prefixes {
    fn default() -> Self {
        use crate::config::defaults::prefix;
        Self {
            plain: prefix::PLAIN.to_string(),
            verbose: prefix::VERBOSE.to_string(),
            debug: prefix::DEBUG.to_string(),
            info: prefix::INFO.to_string(),
            warn: prefix::WARN.to_string(),
            error: prefix::ERROR.to_string(),
            wtf: prefix::WTF.to_string(),
        }
    }
}

impl Prefixes {
    pub fn get(&self, severity: Severity) -> &str {
        match severity {
            Severity::Plain => &self.plain,
            Severity::Verbose => &self.verbose,
            Severity::Debug => &self.debug,
            Severity::Info => &self.info,
            Severity::Warn => &self.warn,
            Severity::Error => &self.error,
            Severity::Wtf => &self.wtf,
        }
    }

    /// Replace a prefix. Rejects prefixes longer than
    /// [`MAX_PREFIX_LEN`](defaults::limits::MAX_PREFIX_LEN) bytes.
    pub fn set(&mut self, severity: Severity, prefix: &str) -> Result<(), ConfigError> {
        check_prefix(severity, prefix)?;
        let slot = match severity {
            Severity::Plain => &mut self.plain,
            Severity::Verbose => &mut self.verbose,
            Severity::Debug => &mut self.debug,
            Severity::Info => &mut self.info,
            Severity::Warn => &mut self.warn,
            Severity::Error => &mut self.error,
            Severity::Wtf => &mut self.wtf,
        };
        prefix.clone_into(slot);
        Ok(())
    }
}

/// Unit scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnitSettings {
    /// Worker slots; zero runs every unit inline.
    pub threads: usize,

    /// Unit-start template, `%s` is the label.
    pub unit_format: String,

    /// Assertion template, `%s` glyph then `%s` message.
    pub assertion_format: String,

    /// Glyph for a passed assertion.
    pub passed: String,

    /// Glyph for a failed assertion.
    pub failed: String,
}

impl Default for UnitSettings {
    fn default() -> Self {
        use crate::config::defaults::unit;
        Self {
            threads: unit::THREADS,
            unit_format: unit::UNIT_FORMAT.to_string(),
            assertion_format: unit::ASSERTION_FORMAT.to_string(),
            passed: unit::PASSED.to_string(),
            failed: unit::FAILED.to_string(),
        }
    }
}

impl UnitSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threads(self.threads)?;
        check_template("unit_format", &self.unit_format)?;
        check_template("assertion_format", &self.assertion_format)?;
        check_template("passed", &self.passed)?;
        check_template("failed", &self.failed)
    }

    pub fn set_unit_format(&mut self, template: &str) -> Result<(), ConfigError> {
        check_template("unit_format", template)?;
        template.clone_into(&mut self.unit_format);
        Ok(())
    }

    pub fn set_assertion_format(&mut self, template: &str) -> Result<(), ConfigError> {
        check_template("assertion_format", template)?;
        template.clone_into(&mut self.assertion_format);
        Ok(())
    }

    /// Replace the pass and fail glyphs together.
    pub fn set_glyphs(&mut self, passed: &str, failed: &str) -> Result<(), ConfigError> {
        check_template("passed", passed)?;
        check_template("failed", failed)?;
        passed.clone_into(&mut self.passed);
        failed.clone_into(&mut self.failed);
        Ok(())
    }
}

fn check_prefix(severity: Severity, prefix: &str) -> Result<(), ConfigError> {
    if prefix.len() > MAX_PREFIX_LEN {
        return Err(ConfigError::PrefixTooLong {
            severity,
            len: prefix.len(),
            max: MAX_PREFIX_LEN,
        });
    }
    Ok(())
}

fn check_template(name: &'static str, template: &str) -> Result<(), ConfigError> {
    if template.len() > MAX_TEMPLATE_LEN {
        return Err(ConfigError::TemplateTooLong {
            name,
            len: template.len(),
            max: MAX_TEMPLATE_LEN,
        });
    }
    Ok(())
}

pub(crate) fn check_threads(requested: usize) -> Result<(), ConfigError> {
    if requested > MAX_THREAD_NUM {
        return Err(ConfigError::TooManyWorkers { requested, max: MAX_THREAD_NUM });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
