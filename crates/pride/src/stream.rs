// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output streams behind the logger.
//!
//! [`StdStreams`] writes to the process stdout/stderr. [`MemoryStreams`]
//! captures lines in memory so callers can inspect what a run printed.

use std::io::{self, IsTerminal, Write};

use parking_lot::Mutex;

/// One of the two standard output streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Stderr,
}

impl Target {
    /// Stream for a stdout routing flag.
    pub fn from_stdout_flag(stdout: bool) -> Self {
        if stdout { Target::Stdout } else { Target::Stderr }
    }
}

/// Destination for rendered log lines.
///
/// Each call hands over one complete line. Implementations must be safe to
/// call from several worker threads at once.
pub trait Streams: Send + Sync {
    /// Write `line` to `target`, returning the number of bytes written.
    fn write(&self, target: Target, line: &[u8]) -> io::Result<usize>;

    /// Whether `target` is attached to a terminal.
    fn is_terminal(&self, target: Target) -> bool;
}

/// The process stdout and stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdStreams;

impl Streams for StdStreams {
    fn write(&self, target: Target, line: &[u8]) -> io::Result<usize> {
        match target {
            Target::Stdout => write_locked(&mut io::stdout().lock(), line),
            Target::Stderr => write_locked(&mut io::stderr().lock(), line),
        }
    }

    fn is_terminal(&self, target: Target) -> bool {
        match target {
            Target::Stdout => io::stdout().is_terminal(),
            Target::Stderr => io::stderr().is_terminal(),
        }
    }
}

fn write_locked(out: &mut dyn Write, line: &[u8]) -> io::Result<usize> {
    out.write_all(line)?;
    out.flush()?;
    Ok(line.len())
}

/// In-memory capture of both streams.
#[derive(Debug, Default)]
pub struct MemoryStreams {
    stdout: Mutex<Vec<u8>>,
    stderr: Mutex<Vec<u8>>,
    terminal: bool,
    broken: bool,
}

impl MemoryStreams {
    /// Capture streams that report as non-terminals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture streams that report as terminals.
    pub fn terminal() -> Self {
        Self { terminal: true, ..Self::default() }
    }

    /// Streams whose every write fails with `BrokenPipe`.
    pub fn broken() -> Self {
        Self { broken: true, ..Self::default() }
    }

    /// Everything written to `target` so far, lossily decoded.
    pub fn contents(&self, target: Target) -> String {
        String::from_utf8_lossy(&self.buffer(target).lock()).into_owned()
    }

    fn buffer(&self, target: Target) -> &Mutex<Vec<u8>> {
        match target {
            Target::Stdout => &self.stdout,
            Target::Stderr => &self.stderr,
        }
    }
}

impl Streams for MemoryStreams {
    fn write(&self, target: Target, line: &[u8]) -> io::Result<usize> {
        if self.broken {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        self.buffer(target).lock().extend_from_slice(line);
        Ok(line.len())
    }

    fn is_terminal(&self, _target: Target) -> bool {
        self.terminal
    }
}
