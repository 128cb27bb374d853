// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Port discovery from module configuration files.
//!
//! ```text
//! module/
//!   src/main/resources/application.yml   port: 8080          --> primary (app config)
//!   k8s/service.yaml                     ports: - port: 80   --> primary fallback (cluster service)
//!                                                 nodePort:  --> node port
//!   Tiltfile                             port_forwards=['8080:8080'] --> local port-forward
//! ```
//!
//! Files are scanned line by line, never parsed as YAML. The first match in a
//! file wins; a missing file or pattern is simply "not found".

use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::config::types::PortsConfig;

static APP_PORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*port:\s*["']?(\d+)"#).expect("valid app port pattern")
});
static PORTS_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*ports:\s*$").expect("valid ports section pattern"));
static SERVICE_PORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*(?:-\s*)?port:\s*["']?(\d+)"#).expect("valid service port pattern")
});
static NODE_PORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*(?:-\s*)?nodePort:\s*["']?(\d+)"#).expect("valid node port pattern")
});
static PORT_FORWARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"port_forwards\s*=\s*\[?\s*["']?(\d+(?::\d+)?)"#).expect("valid port forward pattern")
});

/// Read access to module files, so discovery can run against fixtures.
pub trait FileSource {
    fn is_dir(&self, path: &Path) -> bool;

    /// File contents, or None if the file is absent or unreadable.
    fn read(&self, path: &Path) -> Option<String>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFiles;

impl FileSource for DiskFiles {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }
}

/// In-memory files; every ancestor of a file counts as a directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryFiles {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemoryFiles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.dirs.extend(path.ancestors().map(Path::to_path_buf));
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self = self.with_dir(parent);
        }
        self.files.insert(path, content.into());
        self
    }
}

impl FileSource for MemoryFiles {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn read(&self, path: &Path) -> Option<String> {
        self.files.get(path).cloned()
    }
}

/// Where a primary port came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PortSource {
    #[serde(rename = "app config")]
    AppConfig,
    #[serde(rename = "cluster service")]
    ClusterService,
}

impl fmt::Display for PortSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AppConfig => "app config",
            Self::ClusterService => "cluster service",
        })
    }
}

/// One of the four scanned locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortProbe {
    /// `port:` in the application configuration.
    AppConfig,
    /// First `port:` after `ports:` in the service manifest.
    ServicePort,
    /// `nodePort:` in the service manifest.
    NodePort,
    /// `port_forwards=[...]` in the local development file.
    PortForward,
}

impl PortProbe {
    /// File this probe reads, relative to the module directory.
    #[must_use]
    pub fn file<'a>(&self, config: &'a PortsConfig) -> &'a Path {
        match self {
            Self::AppConfig => &config.app_config,
            Self::ServicePort | Self::NodePort => &config.service_manifest,
            Self::PortForward => &config.local_dev,
        }
    }

    /// First match in `text`, as written in the file.
    #[must_use]
    pub fn scan(&self, text: &str) -> Option<String> {
        let capture = |re: &Regex, haystack: &str| {
            re.captures(haystack)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        };

        match self {
            Self::AppConfig => capture(&APP_PORT, text),
            Self::ServicePort => {
                let section = PORTS_SECTION.find(text)?;
                capture(&SERVICE_PORT, &text[section.end()..])
            }
            Self::NodePort => capture(&NODE_PORT, text),
            Self::PortForward => capture(&PORT_FORWARD, text),
        }
    }
}

/// Primary port with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimaryPort {
    pub port: u16,
    pub source: PortSource,
}

/// Ports discovered for one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortInfo {
    pub primary: Option<PrimaryPort>,
    /// Only set when it differs from the primary port.
    pub node_port: Option<u16>,
    /// `HOST:CONTAINER` mapping for local development.
    pub port_forward: Option<String>,
}

impl PortInfo {
    /// Combine raw probe results. App config beats the cluster service for the
    /// primary port.
    #[must_use]
    pub fn combine(
        app_port: Option<u16>,
        service_port: Option<u16>,
        node_port: Option<u16>,
        port_forward: Option<String>,
    ) -> Self {
        let primary = app_port
            .map(|port| PrimaryPort {
                port,
                source: PortSource::AppConfig,
            })
            .or_else(|| {
                service_port.map(|port| PrimaryPort {
                    port,
                    source: PortSource::ClusterService,
                })
            });
        let node_port = node_port.filter(|node| primary.is_none_or(|p| p.port != *node));

        Self {
            primary,
            node_port,
            port_forward,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.primary.is_none() && self.node_port.is_none() && self.port_forward.is_none()
    }
}

impl fmt::Display for PortInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("not available (no port config found)");
        }

        let mut parts = Vec::new();
        if let Some(primary) = self.primary {
            parts.push(format!("{} ({})", primary.port, primary.source));
        }
        if let Some(node) = self.node_port {
            parts.push(format!("node port {node}"));
        }
        if let Some(forward) = &self.port_forward {
            parts.push(format!("local port-forward {forward}"));
        }
        f.write_str(&parts.join(", "))
    }
}

/// Port lookup result for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PortLookup {
    Found(PortInfo),
    ModuleNotFound,
}

impl PortLookup {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::ModuleNotFound)
    }
}

impl fmt::Display for PortLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(info) => fmt::Display::fmt(info, f),
            Self::ModuleNotFound => f.write_str("not available (module not found)"),
        }
    }
}

/// Probe every location under `module_dir`.
pub fn discover<F: FileSource>(files: &F, module_dir: &Path, config: &PortsConfig) -> PortLookup {
    if !files.is_dir(module_dir) {
        return PortLookup::ModuleNotFound;
    }

    let probe = |probe: PortProbe| {
        let path = module_dir.join(probe.file(config));
        let found = files.read(&path).and_then(|text| probe.scan(&text));
        tracing::trace!(?probe, path = %path.display(), ?found, "port probe");
        found
    };
    let number = |probe_kind: PortProbe| probe(probe_kind).and_then(|raw| raw.parse::<u16>().ok());

    PortLookup::Found(PortInfo::combine(
        number(PortProbe::AppConfig),
        number(PortProbe::ServicePort),
        number(PortProbe::NodePort),
        probe(PortProbe::PortForward),
    ))
}

#[cfg(test)]
mod tests;
