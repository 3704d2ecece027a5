// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! printf-style templates for configurable message lines.
//!
//! Templates are plain strings with positional directives:
//! - `%s`, `%d`, `%i`, `%u`: next argument, rendered with `Display`
//! - `%%`: a literal `%`
//!
//! Any other `%` sequence is copied through unchanged. Missing arguments
//! render as nothing; surplus arguments are ignored.

use std::fmt::{self, Write};

/// Expand `template` with positional `args`.
pub fn expand(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('s' | 'd' | 'i' | 'u') => {
                chars.next();
                if let Some(arg) = args.next() {
                    // Writing into a String cannot fail.
                    let _ = write!(out, "{arg}");
                }
            }
            _ => out.push('%'),
        }
    }
    out
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
