// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color mode selection and the summary color scheme.

use std::io::IsTerminal;

use clap::ValueEnum;
use termcolor::ColorChoice;

use crate::config::LogSettings;

/// `--color` argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color terminals only.
    #[default]
    Auto,
    /// Color everything, including pipes and files.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Override the log color flags. `Auto` keeps what the config says.
    pub fn apply(self, log: &mut LogSettings) {
        match self {
            ColorMode::Auto => {}
            ColorMode::Always => {
                log.color = true;
                log.force_color = true;
            }
            ColorMode::Never => {
                log.color = false;
                log.force_color = false;
            }
        }
    }
}

/// Whether the `NO_COLOR` convention is in effect.
pub fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Stdout color choice for the summary line, following the effective log
/// color flags.
pub fn summary_color(log: &LogSettings) -> ColorChoice {
    color_choice(log, std::io::stdout().is_terminal())
}

/// Color choice for a stream, from the log color flags.
pub fn color_choice(log: &LogSettings, is_terminal: bool) -> ColorChoice {
    if log.colorize(is_terminal) { ColorChoice::Always } else { ColorChoice::Never }
}

/// Summary color scheme.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Unit label and totals.
    pub fn heading() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Aborted units.
    pub fn aborted() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
