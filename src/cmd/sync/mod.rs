// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync command implementation: stage, commit and push per target.
//!
//! ```text
//! per target:
//!   checkout? --> pending changes? --> add -A --> staged? --> commit
//!                      | no                         | no        |
//!                "nothing to sync"          "nothing staged"   v
//!                                               branch? --> remote branch? --> push
//! ```
//!
//! With `--dry-run` only the pending changes are shown.

use tracing::{debug, info, info_span, warn};

use crate::cli::sync::SyncArgs;
use crate::cmd::print_report;
use crate::error::Result;
use crate::git::VersionControl;
use crate::report::{BatchReport, ExitStatus, OperationResult};
use crate::workspace::{SyncTarget, Workspace, check_checkout};

/// Changed paths shown per target in a dry run.
pub const PREVIEW_LIMIT: usize = 10;

/// Options shared by every target of one sync invocation.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    pub message: Option<String>,
    pub force: bool,
    pub dry_run: bool,
}

impl From<&SyncArgs> for SyncOptions {
    fn from(args: &SyncArgs) -> Self {
        Self {
            message: args.message.clone(),
            force: args.force,
            dry_run: args.dry_run,
        }
    }
}

/// Main handler for the sync command.
///
/// # Errors
///
/// Returns a usage error if `--all` is combined with targets or a module name
/// is unknown; no git command runs in that case.
pub fn run_sync_command<V: VersionControl>(
    args: &SyncArgs,
    workspace: &Workspace,
    vcs: &V,
) -> Result<ExitStatus> {
    let targets = workspace.resolve_sync_targets(&args.targets, args.all)?;
    let options = SyncOptions::from(args);
    let report = sync_targets(workspace, vcs, &targets, &options);

    if options.dry_run {
        print_report(&report, "Dry run completed");
        return Ok(ExitStatus::Success);
    }
    print_report(&report, "Sync operation completed");
    Ok(report.exit_status())
}

/// Sync each target in order; one target's failure never stops the others.
pub fn sync_targets<V: VersionControl>(
    workspace: &Workspace,
    vcs: &V,
    targets: &[SyncTarget],
    options: &SyncOptions,
) -> BatchReport {
    let mut report = BatchReport::new();
    for target in targets {
        let _span = info_span!("sync", target = %target).entered();
        let result = if options.dry_run {
            preview_target(workspace, vcs, target)
        } else {
            sync_target(workspace, vcs, target, options)
        };
        report.push(result);
    }
    report
}

fn preview_target<V: VersionControl>(
    workspace: &Workspace,
    vcs: &V,
    target: &SyncTarget,
) -> OperationResult {
    let label = target.label();
    let dir = workspace.target_dir(target);
    if let Err(reason) = check_checkout(vcs, &dir) {
        warn!("{reason}");
        return OperationResult::success_with(label, format!("skipped, {reason}"));
    }

    let status = match vcs.status(&dir) {
        Ok(status) => status,
        Err(e) => {
            warn!("cannot read status: {e}");
            return OperationResult::success_with(label, format!("skipped, {e}"));
        }
    };
    if status.is_empty() {
        return OperationResult::success_with(label, "nothing to sync");
    }

    println!("{label}: {} pending change(s)", status.len());
    for line in preview_lines(&status) {
        println!("  {line}");
    }
    OperationResult::success_with(label, format!("{} pending change(s), not committed", status.len()))
}

/// First [`PREVIEW_LIMIT`] status lines plus a count of the rest.
#[must_use]
pub fn preview_lines(status: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = status.iter().take(PREVIEW_LIMIT).cloned().collect();
    if status.len() > PREVIEW_LIMIT {
        lines.push(format!("... and {} more", status.len() - PREVIEW_LIMIT));
    }
    lines
}

fn sync_target<V: VersionControl>(
    workspace: &Workspace,
    vcs: &V,
    target: &SyncTarget,
    options: &SyncOptions,
) -> OperationResult {
    let label = target.label();
    let dir = workspace.target_dir(target);
    if let Err(reason) = check_checkout(vcs, &dir) {
        warn!("{reason}");
        return OperationResult::failure(label, reason);
    }

    match vcs.status(&dir) {
        Ok(status) if status.is_empty() => {
            info!("nothing to sync");
            return OperationResult::success_with(label, "nothing to sync");
        }
        Ok(status) => debug!(changes = status.len(), "pending changes"),
        Err(e) => return OperationResult::failure(label, e.to_string()),
    }

    if let Err(e) = vcs.stage_all(&dir) {
        return OperationResult::failure(label, e.to_string());
    }
    let staged = match vcs.staged_files(&dir) {
        Ok(staged) => staged,
        Err(e) => return OperationResult::failure(label, e.to_string()),
    };
    if staged.is_empty() {
        info!("nothing staged");
        return OperationResult::success_with(label, "nothing staged");
    }

    let message = options
        .message
        .clone()
        .unwrap_or_else(|| commit_message(target, &staged));
    if let Err(e) = vcs.commit(&dir, &message) {
        warn!("commit failed: {e}");
        return OperationResult::failure(label, e.to_string());
    }
    info!(%message, files = staged.len(), "committed");

    let branch = match vcs.current_branch(&dir) {
        Ok(Some(branch)) => branch,
        Ok(None) => {
            warn!("detached HEAD, commit not pushed");
            return OperationResult::failure(label, "detached HEAD, committed but not pushed");
        }
        Err(e) => return OperationResult::failure(label, e.to_string()),
    };

    let remote = workspace.remote();
    match vcs.remote_branch_exists(&dir, remote, &branch) {
        Ok(true) => {}
        Ok(false) => {
            warn!(remote, %branch, "remote branch not found, commit not pushed");
            return OperationResult::failure(
                label,
                format!("branch '{branch}' not found on '{remote}', committed but not pushed"),
            );
        }
        Err(e) => return OperationResult::failure(label, e.to_string()),
    }

    if let Err(e) = vcs.push(&dir, remote, &branch, options.force) {
        warn!("push failed: {e}");
        return OperationResult::failure(label, e.to_string());
    }
    info!(remote, %branch, force = options.force, "pushed");
    OperationResult::success_with(label, format!("pushed to {remote}/{branch}"))
}

/// Commit message used when none was given.
///
/// ```text
/// parent, 1 file   Update <path>
/// parent, N files  Update N files
/// module           Update <module> module
/// ```
#[must_use]
pub fn commit_message(target: &SyncTarget, staged: &[String]) -> String {
    match (target, staged) {
        (SyncTarget::Module(name), _) => format!("Update {name} module"),
        (SyncTarget::Parent, [path]) => format!("Update {path}"),
        (SyncTarget::Parent, files) => format!("Update {} files", files.len()),
    }
}
