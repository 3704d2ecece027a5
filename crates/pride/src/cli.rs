// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::color::{ColorMode, no_color_env};
use crate::config::{self, Settings, defaults};

/// A minimal threaded unit testing harness; runs the built-in smoke suite
#[derive(Debug, Parser)]
#[command(name = "pride")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "PRIDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Worker slots (0 runs units inline)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Add a unit with a failing assertion
    #[arg(long)]
    pub fail: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Effective color mode after `--no-color` and `NO_COLOR`.
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color || no_color_env() { ColorMode::Never } else { self.color }
    }

    /// Config file to read: `--config`, else `pride.toml` in `cwd` if present.
    pub fn config_path(&self, cwd: &Path) -> Option<PathBuf> {
        if let Some(path) = &self.config {
            return Some(path.clone());
        }
        let default = cwd.join(defaults::CONFIG_FILE);
        default.is_file().then_some(default)
    }

    /// Load the config file (if any) and apply command-line overrides.
    pub fn settings(&self, config_path: Option<&Path>) -> anyhow::Result<Settings> {
        let mut settings = match config_path {
            Some(path) => config::load(path)?,
            None => Settings::default(),
        };
        if let Some(threads) = self.threads {
            settings.unit.threads = threads;
        }
        self.color_mode().apply(&mut settings.log);
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
