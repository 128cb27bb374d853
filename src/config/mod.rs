// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for repo-fleet.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. fleet.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. FLEET_* env vars
//! 5. CLI overrides (--root, --remote)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! FLEET_WORKSPACE__REMOTE=upstream  → workspace.remote = "upstream"
//! FLEET_PORTS__LOCAL_DEV=dev/Tilt   → ports.local_dev = "dev/Tilt"
//! ```
//!
//! # Example
//!
//! ```toml
//! [workspace]
//! root = "."
//! remote = "origin"
//!
//! [modules]
//! names = ["gateway", "billing"]
//!
//! [modules.descriptions]
//! billing = "Invoices and payments"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{ConfigError, FleetResult};

use loader::ConfigLoader;
use types::{ModulesConfig, PortsConfig, WorkspaceConfig};

/// Default configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "fleet.toml";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "FLEET";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Parent checkout options.
    pub workspace: WorkspaceConfig,
    /// Module registry.
    pub modules: ModulesConfig,
    /// Port discovery sources.
    pub ports: PortsConfig,
}

impl Config {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> FleetResult<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or fails validation.
    pub fn parse(content: &str) -> FleetResult<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check invariants the registry and git calls rely on.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty registry, empty or
    /// duplicate module names, a module named `.` or `..`, or an empty remote.
    pub fn validate(&self) -> FleetResult<()> {
        let invalid = |section: &str, key: &str, message: String| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message,
        };

        if self.workspace.remote.trim().is_empty() {
            return Err(invalid("workspace", "remote", "must not be empty".to_string()).into());
        }
        if self.modules.names.is_empty() {
            return Err(invalid("modules", "names", "at least one module is required".into()).into());
        }

        let mut seen = BTreeSet::new();
        for name in &self.modules.names {
            if name.trim().is_empty() || matches!(name.as_str(), "." | "..") || name.contains(['/', '\\']) {
                return Err(invalid("modules", "names", format!("invalid module name '{name}'")).into());
            }
            if !seen.insert(name.as_str()) {
                return Err(invalid("modules", "names", format!("duplicate module '{name}'")).into());
            }
        }
        Ok(())
    }

    /// Format configuration options for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "workspace.root".to_string(),
            self.workspace.root.display().to_string(),
        );
        options.insert("workspace.remote".to_string(), self.workspace.remote.clone());
        options.insert("modules.names".to_string(), self.modules.names.join(", "));
        for (name, text) in &self.modules.descriptions {
            options.insert(format!("modules.descriptions.{name}"), text.clone());
        }
        options.insert(
            "ports.app_config".to_string(),
            self.ports.app_config.display().to_string(),
        );
        options.insert(
            "ports.service_manifest".to_string(),
            self.ports.service_manifest.display().to_string(),
        );
        options.insert(
            "ports.local_dev".to_string(),
            self.ports.local_dev.display().to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);
        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
