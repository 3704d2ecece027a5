// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values and limits for configuration.

/// Hard limits enforced by the setters.
pub mod limits {
    /// Longest accepted severity prefix, in bytes.
    pub const MAX_PREFIX_LEN: usize = 64;

    /// Longest accepted message template or glyph, in bytes.
    pub const MAX_TEMPLATE_LEN: usize = 256;

    /// Largest accepted worker pool.
    pub const MAX_THREAD_NUM: usize = 256;
}

/// Default severity prefixes.
pub mod prefix {
    use crate::sgr;

    pub const PLAIN: &str = sgr::RESET;
    pub const VERBOSE: &str = sgr::RESET;
    pub const DEBUG: &str = sgr::BLUE;
    pub const INFO: &str = "\x1b[32m\x1b[1m";
    pub const WARN: &str = "\x1b[33m\x1b[1m";
    pub const ERROR: &str = "\x1b[31m\x1b[1m";
    pub const WTF: &str = "\x1b[31m\x1b[1m";
}

/// Default unit and assertion line templates.
pub mod unit {
    /// Unit-start line; `%s` is the unit label.
    pub const UNIT_FORMAT: &str = "---\tStart testing: %s\n";

    /// Assertion line; first `%s` is the glyph, second the message.
    pub const ASSERTION_FORMAT: &str = "[%s]\t%s\n";

    pub const PASSED: &str = "✔";
    pub const FAILED: &str = "✘";

    /// Worker slots; zero runs every unit inline.
    pub const THREADS: usize = 0;
}

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE: &str = "pride.toml";
