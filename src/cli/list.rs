// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command arguments.
//!
//! `--modules` always covers the whole registry; positional modules only
//! narrow `--port`.

use clap::{ArgGroup, Args};

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
#[command(group(
    ArgGroup::new("mode")
        .args(["port", "modules"])
        .required(true)
        .multiple(true)
))]
pub struct ListArgs {
    /// Shows the ports each module exposes.
    #[arg(short = 'p', long)]
    pub port: bool,

    /// Shows every registered module and whether it is checked out.
    #[arg(long)]
    pub modules: bool,

    /// Looks up ports for every module (the default when no module is given).
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Prints JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Modules to look up ports for.
    #[arg(value_name = "MODULE")]
    pub names: Vec<String>,
}
