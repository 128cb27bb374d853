// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pull command arguments.

use clap::Args;

/// Arguments for the `pull` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PullArgs {
    /// Pulls every registered module (the default when no module is given).
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Pulls even if the module has uncommitted changes.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Modules to pull.
    #[arg(value_name = "MODULE")]
    pub modules: Vec<String>,
}
