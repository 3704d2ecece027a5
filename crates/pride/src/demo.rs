// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in smoke suite run by the `pride` binary.

use std::collections::HashMap;
use std::io;

use termcolor::WriteColor;

use crate::color::scheme;
use crate::counters::RunStats;
use crate::scheduler::Scheduler;
use crate::{check, sgr, template};

/// Submit the smoke suite. The caller drains.
pub fn smoke_suite(scheduler: &Scheduler, include_failure: bool) {
    scheduler.submit("arithmetic", |t| {
        check!(t, 1 + 1 == 2);
        check!(t, 7 * 6 == 42);
        check!(t, 17 % 5 == 2);
        check!(t, i32::MAX.checked_add(1).is_none());
    });

    scheduler.submit("strings", |t| {
        check!(t, "pride".to_uppercase() == "PRIDE");
        check!(t, "a,b,c".split(',').count() == 3);
        check!(t, "  padded ".trim() == "padded");
    });

    scheduler.submit("collections", |t| {
        let mut v = vec![3, 1, 2];
        v.sort_unstable();
        check!(t, v == [1, 2, 3]);

        let map: HashMap<&str, usize> = [("one", 1), ("two", 2)].into_iter().collect();
        check!(t, map.get("two") == Some(&2));
        check!(t, !map.contains_key("three"));
    });

    scheduler.submit("templates", |t| {
        check!(t, template::expand("%s=%d", &[&"n", &4]) == "n=4");
        check!(t, template::expand("100%%", &[]) == "100%");
    });

    scheduler.submit("escapes", |t| {
        let colored = format!("{}{}text", sgr::RED, sgr::BOLD);
        check!(t, sgr::strip(&colored) == "text");
        check!(t, !sgr::strip(&colored).contains(sgr::ESC));
    });

    if include_failure {
        scheduler.submit("deliberate failure", |t| {
            check!(t, 1 + 1 == 3, "one plus one is three");
        });
    }
}

/// Write the one-line run summary.
pub fn write_summary(out: &mut dyn WriteColor, stats: &RunStats) -> io::Result<()> {
    out.set_color(&scheme::heading())?;
    write!(out, "{} units, {} assertions", stats.units_submitted, total(stats))?;
    out.reset()?;
    write!(out, ": ")?;

    out.set_color(&scheme::pass())?;
    write!(out, "{} passed", stats.assertion_passed_count)?;
    out.reset()?;
    write!(out, ", ")?;

    if stats.assertion_failed_count > 0 {
        out.set_color(&scheme::fail())?;
    }
    write!(out, "{} failed", stats.assertion_failed_count)?;
    out.reset()?;

    if stats.units_aborted > 0 {
        write!(out, ", ")?;
        out.set_color(&scheme::aborted())?;
        write!(out, "{} aborted", stats.units_aborted)?;
        out.reset()?;
    }
    writeln!(out)
}

/// Assertions across all units.
///
/// `assertion_count` restarts with each inline unit, so the total is taken
/// from the pass and fail counts.
fn total(stats: &RunStats) -> u64 {
    stats.assertion_passed_count + stats.assertion_failed_count
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
