// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

use pride::cli::Cli;
use pride::color::summary_color;
use pride::verbose::{self, VerboseLogger};
use pride::{Scheduler, demo};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PRIDE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config_path = cli.config_path(&cwd);
    let settings = cli.settings(config_path.as_deref())?;

    let scheduler = Scheduler::with_settings(settings.clone())?;
    let verbose = VerboseLogger::new(cli.verbose, scheduler.logger());
    verbose::configuration(&verbose, config_path.as_deref(), &settings);

    demo::smoke_suite(&scheduler, cli.fail);
    scheduler.drain();
    let stats = scheduler.stats();
    tracing::debug!(?stats, "run finished");

    let mut stdout = StandardStream::stdout(summary_color(&settings.log));
    demo::write_summary(&mut stdout, &stats).context("Failed to write summary")?;

    Ok(if stats.has_failures() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
