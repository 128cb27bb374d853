// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> ExitStatus
//!   pull, sync, list, config
//! ```
//!
//! Handlers validate every user-supplied name before the first git call, then
//! process targets one at a time and collect a [`BatchReport`].

pub mod config;
pub mod list;
pub mod pull;
pub mod sync;

use crate::report::BatchReport;

/// Print each result followed by the summary block.
pub(crate) fn print_report(report: &BatchReport, completed: &str) {
    for result in report.results() {
        println!("{result}");
    }
    println!();
    for line in report.summary(completed) {
        println!("{line}");
    }
}
