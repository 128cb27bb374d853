// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   Pull | Sync | List | Config | Version
//! ```
//!
//! Exit status: 0 success, 1 failed targets or environment errors, 2 usage
//! errors (clap reports its own with 2 before we get here).

use std::process::ExitCode;

use repo_fleet::cli::global::GlobalOptions;
use repo_fleet::cli::{self, Command};
use repo_fleet::cmd::config::run_config_command;
use repo_fleet::cmd::list::run_list_command;
use repo_fleet::cmd::pull::run_pull_command;
use repo_fleet::cmd::sync::run_sync_command;
use repo_fleet::config::loader::ConfigLoader;
use repo_fleet::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use repo_fleet::error::{FleetResult, Result, is_usage_error};
use repo_fleet::git::SystemGit;
use repo_fleet::logging::init_logging;
use repo_fleet::logging::{LogConfig, LogLevel};
use repo_fleet::ports::DiskFiles;
use repo_fleet::report::ExitStatus;
use repo_fleet::workspace::Workspace;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).into()
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::DEBUG);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitStatus {
    let result = match &cli.command {
        None => {
            print!("{}", cli::render_usage());
            Ok(ExitStatus::Success)
        }
        Some(Command::Version) => {
            handle_version_command();
            Ok(ExitStatus::Success)
        }
        Some(Command::Config) => build_config_loader(&cli.global)
            .map_err(anyhow::Error::from)
            .and_then(|loader| {
                let files = loader.format_loaded_files();
                let config = loader.build()?;
                run_config_command(&config, &files);
                Ok(ExitStatus::Success)
            }),
        Some(Command::Pull(args)) => prepare(&cli.global)
            .and_then(|(workspace, git)| run_pull_command(args, &workspace, &git)),
        Some(Command::Sync(args)) => prepare(&cli.global)
            .and_then(|(workspace, git)| run_sync_command(args, &workspace, &git)),
        Some(Command::List(args)) => prepare(&cli.global)
            .and_then(|(workspace, git)| run_list_command(args, &workspace, &git, &DiskFiles)),
    };

    match result {
        Ok(status) => status,
        Err(e) if is_usage_error(&e) => {
            eprintln!("Error: {e:#}");
            eprintln!("Use --help for usage information.");
            ExitStatus::Usage
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitStatus::Failure
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> FleetResult<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    let config = build_config_loader(global)?.build()?;
    tracing::debug!(root = %config.workspace.root.display(), remote = %config.workspace.remote, "config loaded");
    Ok(config)
}

fn prepare(global: &GlobalOptions) -> Result<(Workspace, SystemGit)> {
    let config = load_config(global)?;
    let git = SystemGit::locate()?;
    Ok((Workspace::from_config(&config), git))
}
