// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation.
//!
//! ```text
//! --modules  every registry module: MODULE  STATUS  DESCRIPTION
//! --port     selected modules:      <module>: <ports>
//! --json     either or both as one JSON object
//! ```
//!
//! The inventory never fails. A port lookup fails only when the module
//! directory is missing.

use serde::Serialize;
use tracing::{debug, info_span};

use crate::cli::list::ListArgs;
use crate::error::Result;
use crate::git::VersionControl;
use crate::ports::{FileSource, PortLookup, discover};
use crate::report::{BatchReport, ExitStatus, OperationResult};
use crate::workspace::{ModuleStatus, Workspace};

/// One row of the module inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleEntry {
    pub module: String,
    pub status: ModuleStatus,
    pub description: String,
}

/// Port lookup result for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortEntry {
    pub module: String,
    pub ports: PortLookup,
}

#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    modules: Option<&'a [ModuleEntry]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ports: Option<&'a [PortEntry]>,
}

/// Main handler for the list command.
///
/// # Errors
///
/// Returns a usage error if a module name given for `--port` is unknown, or an
/// error if JSON rendering fails.
pub fn run_list_command<V: VersionControl, F: FileSource>(
    args: &ListArgs,
    workspace: &Workspace,
    vcs: &V,
    files: &F,
) -> Result<ExitStatus> {
    let port_modules = if args.port {
        Some(workspace.registry().select(&args.names, args.all)?)
    } else {
        None
    };

    let inventory = args.modules.then(|| module_inventory(workspace, vcs));
    let ports = port_modules.map(|modules| port_lookups(workspace, files, &modules));
    let report = ports.as_deref().map(port_report);

    if args.json {
        let output = ListOutput {
            modules: inventory.as_deref(),
            ports: ports.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if let Some(entries) = &inventory {
            for line in render_inventory(entries) {
                println!("{line}");
            }
        }
        if let Some(entries) = &ports {
            if inventory.is_some() {
                println!();
            }
            for entry in entries {
                println!("{}: {}", entry.module, entry.ports);
            }
        }
        if let Some(report) = &report {
            println!();
            for line in report.summary("Port lookup completed") {
                println!("{line}");
            }
        }
    }

    Ok(report.map_or(ExitStatus::Success, |r| r.exit_status()))
}

/// Status and description of every registry module, in registry order.
pub fn module_inventory<V: VersionControl>(workspace: &Workspace, vcs: &V) -> Vec<ModuleEntry> {
    workspace
        .registry()
        .names()
        .iter()
        .map(|name| ModuleEntry {
            module: name.clone(),
            status: workspace.module_status(vcs, name),
            description: workspace.description(name).to_string(),
        })
        .collect()
}

/// Aligned text table with a header row.
#[must_use]
pub fn render_inventory(entries: &[ModuleEntry]) -> Vec<String> {
    let statuses: Vec<String> = entries.iter().map(|e| e.status.to_string()).collect();
    let name_width = entries
        .iter()
        .map(|e| e.module.len())
        .chain(["MODULE".len()])
        .max()
        .unwrap_or(0);
    let status_width = statuses
        .iter()
        .map(String::len)
        .chain(["STATUS".len()])
        .max()
        .unwrap_or(0);

    let row = |module: &str, status: &str, description: &str| {
        format!("{module:<name_width$}  {status:<status_width$}  {description}")
    };

    let mut lines = vec![row("MODULE", "STATUS", "DESCRIPTION")];
    lines.extend(
        entries
            .iter()
            .zip(&statuses)
            .map(|(entry, status)| row(&entry.module, status, &entry.description)),
    );
    lines
}

/// Probe each module's port sources.
pub fn port_lookups<F: FileSource>(
    workspace: &Workspace,
    files: &F,
    modules: &[String],
) -> Vec<PortEntry> {
    modules
        .iter()
        .map(|module| {
            let _span = info_span!("ports", module = %module).entered();
            let ports = discover(files, &workspace.module_dir(module), workspace.ports());
            debug!(%ports, "lookup done");
            PortEntry {
                module: module.clone(),
                ports,
            }
        })
        .collect()
}

fn port_report(entries: &[PortEntry]) -> BatchReport {
    let mut report = BatchReport::new();
    for entry in entries {
        report.push(if entry.ports.is_failure() {
            OperationResult::failure(&entry.module, "module not found")
        } else {
            OperationResult::success(&entry.module)
        });
    }
    report
}
