// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefixed message rendering.

use std::fmt::{self, Write};

use crate::sgr;

/// Render `prefix`, then `body`, then a reset sequence.
///
/// With `colored == false` every SGR sequence is stripped from the prefix.
/// The body is never touched and the trailing reset is always present.
pub fn render(prefix: &str, body: fmt::Arguments<'_>, colored: bool) -> String {
    let mut out = String::with_capacity(prefix.len() + 64 + sgr::RESET.len());
    if colored {
        out.push_str(prefix);
    } else {
        out.push_str(&sgr::strip(prefix));
    }
    // Only a failing `Display` impl errors here; the line keeps what was
    // written before it.
    if out.write_fmt(body).is_err() {
        tracing::debug!("log message formatting failed; line truncated");
    }
    out.push_str(sgr::RESET);
    out
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
