// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for repo-fleet using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! fleet [global options] <command>
//! pull [--all] [--force] [MODULE...]
//! sync [--all] [-m MSG] [--force] [--dry-run] [TARGET...]
//! list [--port] [--modules] [--all] [--json] [MODULE...]
//! config
//! version
//! ```
//!
//! The [`Command`] enum is the action table: adding an action means adding a
//! variant, and `main` must handle it.

pub mod global;
pub mod list;
pub mod pull;
pub mod sync;


use crate::cli::global::GlobalOptions;
use crate::cli::list::ListArgs;
use crate::cli::pull::PullArgs;
use crate::cli::sync::SyncArgs;
use clap::{CommandFactory, Parser, Subcommand};

/// Pull, sync and inspect the service modules of one checkout.
#[derive(Debug, Parser)]
#[command(
    name = "fleet",
    author,
    version,
    about = "Multi-module git helper",
    long_about = "repo-fleet Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs pull, commit-and-push and inventory operations across the\n\
                  modules of a parent checkout. See `fleet <command> --help` for\n\
                  more information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  fleet reads `fleet.toml` from the current directory if present,\n\
                  then every file given with --config, then FLEET_* environment\n\
                  variables (FLEET_WORKSPACE__REMOTE=upstream). The [modules]\n\
                  section lists the module names every command validates against.\n\n\
                  EXIT STATUS:\n\n\
                  0 success, 1 one or more targets failed, 2 usage error."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pulls the current branch of each module from the remote.
    Pull(PullArgs),

    /// Commits and pushes changes in the parent checkout or in modules.
    Sync(SyncArgs),

    /// Lists module status and/or discovered service ports.
    List(ListArgs),

    /// Shows the effective configuration.
    Config,

    /// Shows the version.
    Version,
}

/// Parses command-line arguments.
///
/// Exits with status 2 on invalid arguments and 0 after `--help`.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Top-level usage text listing every command.
#[must_use]
pub fn render_usage() -> String {
    Cli::command().render_help().to_string()
}
