// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync command arguments.
//!
//! ```text
//! sync                 → parent checkout only
//! sync . gateway       → parent, then gateway
//! sync --all           → every module (not the parent)
//! sync --all gateway   → usage error
//! ```

use clap::Args;

/// Arguments for the `sync` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Syncs every registered module.
    #[arg(short = 'a', long, conflicts_with = "targets")]
    pub all: bool,

    /// Commit message; generated per target when omitted.
    #[arg(short = 'm', long, value_name = "MSG")]
    pub message: Option<String>,

    /// Force-pushes.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Only shows pending changes; nothing is staged, committed or pushed.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// `.` for the parent checkout or a module name.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,
}
