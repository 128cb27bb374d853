// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use clap::error::ErrorKind;
use repo_fleet::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Version / Config Commands
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["fleet", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_flag_exits_zero() {
    let err = Cli::try_parse_from(["fleet", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    assert_eq!(err.exit_code(), 0);
}

#[test]
fn cli_config_command() {
    let cli = Cli::try_parse_from(["fleet", "config"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Config)));
}

// =============================================================================
// Pull Command
// =============================================================================

#[test]
fn cli_pull_defaults() {
    let cli = Cli::try_parse_from(["fleet", "pull"]).unwrap();
    let Some(Command::Pull(args)) = cli.command else {
        panic!("expected pull");
    };
    assert!(!args.all && !args.force);
    assert!(args.modules.is_empty());
}

#[test]
fn cli_pull_all_force() {
    let cli = Cli::try_parse_from(["fleet", "pull", "--all", "--force"]).unwrap();
    let Some(Command::Pull(args)) = cli.command else {
        panic!("expected pull");
    };
    assert!(args.all && args.force);
}

#[test]
fn cli_pull_help() {
    let err = Cli::try_parse_from(["fleet", "help", "pull"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert!(err.to_string().contains("--force"));
}

// =============================================================================
// Sync Command
// =============================================================================

#[test]
fn cli_sync_long_flags() {
    let cli = Cli::try_parse_from([
        "fleet",
        "sync",
        "--message",
        "Rotate keys",
        "--force",
        "--dry-run",
        "auth-service",
    ])
    .unwrap();
    let Some(Command::Sync(args)) = cli.command else {
        panic!("expected sync");
    };
    assert_eq!(args.message.as_deref(), Some("Rotate keys"));
    assert!(args.force && args.dry_run && !args.all);
    assert_eq!(args.targets, ["auth-service"]);
}

#[test]
fn cli_sync_message_requires_value() {
    let err = Cli::try_parse_from(["fleet", "sync", "-m"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn cli_sync_all_conflicts_with_parent_marker() {
    let err = Cli::try_parse_from(["fleet", "sync", "-a", "."]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

// =============================================================================
// List Command
// =============================================================================

#[test]
fn cli_list_port_json() {
    let cli = Cli::try_parse_from(["fleet", "list", "-p", "--json"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list");
    };
    assert!(args.port && args.json && !args.modules);
}

#[test]
fn cli_list_without_mode() {
    let err = Cli::try_parse_from(["fleet", "list", "--all"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert_eq!(err.exit_code(), 2);
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options() {
    let cli = Cli::try_parse_from([
        "fleet",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "--remote",
        "upstream",
        "--log-file",
        "fleet.log",
        "--file-log-level",
        "5",
        "list",
        "--modules",
    ])
    .unwrap();
    let global = cli.global;
    assert_eq!(global.configs, [PathBuf::from("a.toml"), PathBuf::from("b.toml")]);
    assert_eq!(global.remote.as_deref(), Some("upstream"));
    assert_eq!(global.log_file, Some(PathBuf::from("fleet.log")));
    assert_eq!(global.file_log_level, Some(5));
    assert_eq!(global.log_level, None);
    assert_eq!(
        global.to_config_overrides(),
        [("workspace.remote", "upstream".to_string())]
    );
}
