// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Severity-routed, optionally colored log lines.
//!
//! Every line is `prefix + message + RESET`. The prefix is kept verbatim when
//! the destination should be colored (see [`LogSettings::colorize`]) and has
//! its SGR sequences stripped otherwise. Write errors are returned to the
//! caller as-is; nothing here retries or panics.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::LogSettings;
use crate::error::ConfigError;
use crate::format;
use crate::severity::Severity;
use crate::stream::{StdStreams, Streams, Target};

/// Logging sink shared by the scheduler and every running unit.
pub struct Logger {
    settings: RwLock<LogSettings>,
    streams: Arc<dyn Streams>,
}

impl Logger {
    /// Logger writing to the process stdout/stderr.
    pub fn new(settings: LogSettings) -> Result<Self, ConfigError> {
        Self::with_streams(settings, Arc::new(StdStreams))
    }

    /// Logger writing to custom streams.
    pub fn with_streams(
        settings: LogSettings,
        streams: Arc<dyn Streams>,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self::unchecked(settings, streams))
    }

    /// Construct from settings the caller has already validated.
    pub(crate) fn unchecked(settings: LogSettings, streams: Arc<dyn Streams>) -> Self {
        Self { settings: RwLock::new(settings), streams }
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> LogSettings {
        self.settings.read().clone()
    }

    pub fn set_color(&self, enabled: bool) {
        self.settings.write().color = enabled;
    }

    pub fn set_force_color(&self, enabled: bool) {
        self.settings.write().force_color = enabled;
    }

    /// Route `severity` to stdout (`true`) or stderr (`false`).
    pub fn set_stdout(&self, severity: Severity, stdout: bool) {
        self.settings.write().stdout.set(severity, stdout);
    }

    pub fn set_prefix(&self, severity: Severity, prefix: &str) -> Result<(), ConfigError> {
        self.settings.write().prefix.set(severity, prefix)
    }

    /// Stream that `severity` is routed to.
    pub fn target(&self, severity: Severity) -> Target {
        Target::from_stdout_flag(self.settings.read().stdout.get(severity))
    }

    /// Emit one line on the stream configured for `severity`.
    pub fn emit(&self, severity: Severity, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.emit_to(self.target(severity), severity, args)
    }

    /// Emit one line on an explicit stream.
    pub fn emit_to(
        &self,
        target: Target,
        severity: Severity,
        args: fmt::Arguments<'_>,
    ) -> io::Result<usize> {
        let is_terminal = self.streams.is_terminal(target);
        let line = self.render_for(severity, args, |s| s.colorize(is_terminal));
        self.streams.write(target, line.as_bytes())
    }

    /// Emit one line on an arbitrary writer.
    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        is_terminal: bool,
        severity: Severity,
        args: fmt::Arguments<'_>,
    ) -> io::Result<usize> {
        let line = self.render_for(severity, args, |s| s.colorize(is_terminal));
        writer.write_all(line.as_bytes())?;
        Ok(line.len())
    }

    /// Render a line without writing it.
    ///
    /// No stream is involved, so only the `color` flag decides whether the
    /// prefix keeps its sequences.
    pub fn render(&self, severity: Severity, args: fmt::Arguments<'_>) -> String {
        self.render_for(severity, args, |s| s.color)
    }

    fn render_for(
        &self,
        severity: Severity,
        args: fmt::Arguments<'_>,
        colored: impl FnOnce(&LogSettings) -> bool,
    ) -> String {
        let settings = self.settings.read();
        format::render(settings.prefix.get(severity), args, colored(&*settings))
    }

    pub fn plain(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.emit(Severity::Plain, args)
    }

    pub fn verbose(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.emit(Severity::Verbose, args)
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.emit(Severity::Debug, args)
    }

    pub fn info(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.emit(Severity::Info, args)
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.emit(Severity::Warn, args)
    }

    pub fn error(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.emit(Severity::Error, args)
    }

    /// What a Terrible Failure.
    pub fn wtf(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.emit(Severity::Wtf, args)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("settings", &*self.settings.read()).finish_non_exhaustive()
    }
}

/// Emit a PLAIN line: `plain!(logger, "{} units", n)`.
#[macro_export]
macro_rules! plain {
    ($sink:expr, $($arg:tt)+) => {
        $sink.plain(::std::format_args!($($arg)+))
    };
}

/// Emit a VERBOSE line.
#[macro_export]
macro_rules! verbose {
    ($sink:expr, $($arg:tt)+) => {
        $sink.verbose(::std::format_args!($($arg)+))
    };
}

/// Emit a DEBUG line.
#[macro_export]
macro_rules! debug {
    ($sink:expr, $($arg:tt)+) => {
        $sink.debug(::std::format_args!($($arg)+))
    };
}

/// Emit an INFO line.
#[macro_export]
macro_rules! info {
    ($sink:expr, $($arg:tt)+) => {
        $sink.info(::std::format_args!($($arg)+))
    };
}

/// Emit a WARN line.
#[macro_export]
macro_rules! warn {
    ($sink:expr, $($arg:tt)+) => {
        $sink.warn(::std::format_args!($($arg)+))
    };
}

/// Emit an ERROR line.
#[macro_export]
macro_rules! error {
    ($sink:expr, $($arg:tt)+) => {
        $sink.error(::std::format_args!($($arg)+))
    };
}

/// Emit a WTF line.
#[macro_export]
macro_rules! wtf {
    ($sink:expr, $($arg:tt)+) => {
        $sink.wtf(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
