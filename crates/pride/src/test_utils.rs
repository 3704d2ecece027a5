// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::config::Settings;
use crate::scheduler::Scheduler;
use crate::stream::MemoryStreams;

/// Scheduler with `worker_slots` slots whose output is captured in memory.
pub fn capture_scheduler(worker_slots: usize) -> (Scheduler, Arc<MemoryStreams>) {
    let streams = Arc::new(MemoryStreams::new());
    let scheduler = Scheduler::with_streams(Settings::default(), streams.clone()).unwrap();
    scheduler.configure(worker_slots).unwrap();
    (scheduler, streams)
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
