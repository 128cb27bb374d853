// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module registry and workspace layout.
//!
//! ```text
//! root/                 parent checkout, sync target "."
//!   gateway/            registry module (own checkout)
//!   auth-service/
//!   ...
//! ```
//!
//! The registry is built once from [`Config`] and handed to every command;
//! user-supplied module names are validated against it before any git call.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::config::types::PortsConfig;
use crate::error::{FleetResult, usage};
use crate::git::VersionControl;

/// Marker that selects the parent checkout as a sync target.
pub const PARENT_MARKER: &str = ".";

const GENERIC_DESCRIPTION: &str = "Service module";

/// Ordered, duplicate-free set of known module names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRegistry {
    names: Vec<String>,
}

impl ModuleRegistry {
    /// Build a registry, keeping the first occurrence of each name.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    /// Case-exact membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Reject the batch if any name is unknown.
    ///
    /// # Errors
    ///
    /// Returns a usage error naming every invalid module, not just the first.
    pub fn validate<S: AsRef<str>>(&self, names: &[S]) -> FleetResult<()> {
        let invalid: Vec<&str> = names
            .iter()
            .map(|name| name.as_ref())
            .filter(|name| !self.contains(name))
            .collect();

        if invalid.is_empty() {
            return Ok(());
        }

        let noun = if invalid.len() == 1 { "module" } else { "modules" };
        Err(usage(format!(
            "invalid {noun}: {} (valid modules: {})",
            invalid.join(", "),
            self.names.join(", ")
        )))
    }

    /// Selected modules, or the whole registry when `all` is set or nothing
    /// was given. Names are validated first, even alongside `all`.
    ///
    /// # Errors
    ///
    /// Returns a usage error if any name is not registered.
    pub fn select(&self, names: &[String], all: bool) -> FleetResult<Vec<String>> {
        self.validate(names)?;
        if all || names.is_empty() {
            return Ok(self.names.clone());
        }
        Ok(dedup(names))
    }
}

fn dedup(names: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !out.contains(name) {
            out.push(name.clone());
        }
    }
    out
}

/// What a sync operates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyncTarget {
    /// The parent checkout itself (`.`).
    Parent,
    /// A registry module.
    Module(String),
}

impl SyncTarget {
    /// Name used in reports.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Parent => PARENT_MARKER,
            Self::Module(name) => name,
        }
    }
}

impl fmt::Display for SyncTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Directory state of a registry module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    /// Directory exists and is a git checkout.
    Available,
    /// Directory exists but is not a checkout.
    NotACheckout,
    /// Directory is absent.
    Missing,
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Available => "Available",
            Self::NotACheckout => "Not a checkout",
            Self::Missing => "Missing",
        })
    }
}

/// Immutable view of the parent checkout and its modules.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    remote: String,
    registry: ModuleRegistry,
    descriptions: BTreeMap<String, String>,
    ports: PortsConfig,
}

impl Workspace {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, registry: ModuleRegistry) -> Self {
        Self {
            root: root.into(),
            remote: "origin".to_string(),
            registry,
            descriptions: BTreeMap::new(),
            ports: PortsConfig::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            root: config.workspace.root.clone(),
            remote: config.workspace.remote.clone(),
            registry: ModuleRegistry::new(config.modules.names.iter().cloned()),
            descriptions: config.modules.descriptions.clone(),
            ports: config.ports.clone(),
        }
    }

    #[must_use]
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    #[must_use]
    pub fn with_descriptions(mut self, descriptions: BTreeMap<String, String>) -> Self {
        self.descriptions = descriptions;
        self
    }

    #[must_use]
    pub fn with_ports(mut self, ports: PortsConfig) -> Self {
        self.ports = ports;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }

    #[must_use]
    pub const fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn ports(&self) -> &PortsConfig {
        &self.ports
    }

    /// Directory of a module (not checked for existence).
    #[must_use]
    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Working directory of a sync target.
    #[must_use]
    pub fn target_dir(&self, target: &SyncTarget) -> PathBuf {
        match target {
            SyncTarget::Parent => self.root.clone(),
            SyncTarget::Module(name) => self.module_dir(name),
        }
    }

    /// Description for `list --modules`, falling back to a generic one.
    #[must_use]
    pub fn description(&self, name: &str) -> &str {
        self.descriptions
            .get(name)
            .map_or(GENERIC_DESCRIPTION, String::as_str)
    }

    /// Resolve sync targets from the command line.
    ///
    /// `.` selects the parent checkout, anything else must be a registered
    /// module. No targets and no `all` means the parent only; `all` means every
    /// module. Duplicates are dropped, first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns a usage error if `all` is combined with explicit targets, or if
    /// any module name is unknown (all unknown names are reported together).
    pub fn resolve_sync_targets(&self, targets: &[String], all: bool) -> FleetResult<Vec<SyncTarget>> {
        if all && !targets.is_empty() {
            return Err(usage("--all cannot be combined with explicit targets"));
        }
        if all {
            return Ok(self
                .registry
                .names()
                .iter()
                .cloned()
                .map(SyncTarget::Module)
                .collect());
        }
        if targets.is_empty() {
            return Ok(vec![SyncTarget::Parent]);
        }

        let modules: Vec<&String> = targets.iter().filter(|t| *t != PARENT_MARKER).collect();
        self.registry.validate(&modules)?;

        let mut resolved: Vec<SyncTarget> = Vec::with_capacity(targets.len());
        for target in targets {
            let target = if target == PARENT_MARKER {
                SyncTarget::Parent
            } else {
                SyncTarget::Module(target.clone())
            };
            if !resolved.contains(&target) {
                resolved.push(target);
            }
        }
        Ok(resolved)
    }

    /// Classify a module directory.
    pub fn module_status<V: VersionControl>(&self, vcs: &V, name: &str) -> ModuleStatus {
        let dir = self.module_dir(name);
        if !dir.is_dir() {
            ModuleStatus::Missing
        } else if vcs.is_repository(&dir) {
            ModuleStatus::Available
        } else {
            ModuleStatus::NotACheckout
        }
    }
}

/// Confirm `dir` exists and is itself a git checkout.
///
/// # Errors
///
/// Returns the reason as text, suitable for an operation report.
pub fn check_checkout<V: VersionControl>(vcs: &V, dir: &Path) -> Result<(), String> {
    if !dir.is_dir() {
        return Err(format!("directory not found: {}", dir.display()));
    }
    if !vcs.is_repository(dir) {
        return Err(format!("not a git checkout: {}", dir.display()));
    }
    Ok(())
}
