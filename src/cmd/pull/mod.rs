// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pull command implementation.
//!
//! ```text
//! per module:
//!   dir exists? --> checkout? --> clean (or --force)? --> branch? --> git pull
//!        |             |                 |                  |            |
//!        +-------------+-----------------+------------------+------------+
//!                                   failure / success
//! ```

use tracing::{debug, info, info_span, warn};

use crate::cli::pull::PullArgs;
use crate::cmd::print_report;
use crate::error::Result;
use crate::git::VersionControl;
use crate::report::{BatchReport, ExitStatus, OperationResult};
use crate::workspace::{Workspace, check_checkout};

/// Main handler for the pull command.
///
/// # Errors
///
/// Returns a usage error if any module name is unknown; nothing is pulled in
/// that case.
pub fn run_pull_command<V: VersionControl>(
    args: &PullArgs,
    workspace: &Workspace,
    vcs: &V,
) -> Result<ExitStatus> {
    let modules = workspace.registry().select(&args.modules, args.all)?;
    let report = pull_modules(workspace, vcs, &modules, args.force);
    print_report(&report, "Pull operation completed");
    Ok(report.exit_status())
}

/// Pull each module in order; one module's failure never stops the others.
pub fn pull_modules<V: VersionControl>(
    workspace: &Workspace,
    vcs: &V,
    modules: &[String],
    force: bool,
) -> BatchReport {
    let mut report = BatchReport::new();
    for module in modules {
        let _span = info_span!("pull", module = %module).entered();
        let result = pull_module(workspace, vcs, module, force);
        if result.is_success() {
            info!("pulled");
        }
        report.push(result);
    }
    report
}

fn pull_module<V: VersionControl>(
    workspace: &Workspace,
    vcs: &V,
    module: &str,
    force: bool,
) -> OperationResult {
    let dir = workspace.module_dir(module);
    if let Err(reason) = check_checkout(vcs, &dir) {
        warn!("{reason}");
        return OperationResult::failure(module, reason);
    }

    if force {
        debug!("skipping working tree check");
    } else {
        match vcs.has_uncommitted_changes(&dir) {
            Ok(false) => {}
            Ok(true) => {
                warn!("uncommitted changes, skipping (use --force to pull anyway)");
                return OperationResult::failure(module, "uncommitted changes");
            }
            Err(e) => return OperationResult::failure(module, e.to_string()),
        }
    }

    let branch = match vcs.current_branch(&dir) {
        Ok(Some(branch)) => branch,
        Ok(None) => {
            warn!("detached HEAD, skipping");
            return OperationResult::failure(module, "detached HEAD");
        }
        Err(e) => return OperationResult::failure(module, e.to_string()),
    };

    debug!(remote = workspace.remote(), %branch, "pulling");
    match vcs.pull(&dir, workspace.remote(), &branch) {
        Ok(()) => OperationResult::success(module),
        Err(e) => {
            warn!("pull failed: {e}");
            OperationResult::failure(module, e.to_string())
        }
    }
}
