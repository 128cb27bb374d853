// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for repo-fleet.
//!
//! ```text
//! Config: WorkspaceConfig, ModulesConfig, PortsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Module names used when no configuration overrides them.
pub const DEFAULT_MODULES: [&str; 5] = [
    "gateway",
    "auth-service",
    "user-service",
    "order-service",
    "web-frontend",
];

/// Parent checkout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Parent checkout; module directories live directly beneath it.
    pub root: PathBuf,
    /// Remote used for pull and push.
    pub remote: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            remote: "origin".to_string(),
        }
    }
}

/// Module registry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModulesConfig {
    /// Ordered module names.
    pub names: Vec<String>,
    /// Human-readable description per module, shown by `list --modules`.
    pub descriptions: BTreeMap<String, String>,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        let descriptions = [
            ("gateway", "API gateway and edge routing"),
            ("auth-service", "Authentication and token issuing"),
            ("user-service", "User accounts and profiles"),
            ("order-service", "Order processing and checkout"),
            ("web-frontend", "Browser client"),
        ]
        .into_iter()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect();

        Self {
            names: DEFAULT_MODULES.iter().map(ToString::to_string).collect(),
            descriptions,
        }
    }
}

/// Files scanned for port numbers, relative to each module directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortsConfig {
    /// Application configuration holding a `port:` key.
    pub app_config: PathBuf,
    /// Cluster service manifest holding `ports:` / `port:` / `nodePort:`.
    pub service_manifest: PathBuf,
    /// Local development file holding `port_forwards=['HOST:CONTAINER']`.
    pub local_dev: PathBuf,
}

impl Default for PortsConfig {
    fn default() -> Self {
        Self {
            app_config: PathBuf::from("src/main/resources/application.yml"),
            service_manifest: PathBuf::from("k8s/service.yaml"),
            local_dev: PathBuf::from("Tiltfile"),
        }
    }
}
