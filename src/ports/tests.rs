// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{MemoryFiles, PortInfo, PortLookup, PortProbe, PortSource, PrimaryPort, discover};
use crate::config::types::PortsConfig;
use std::path::Path;

const APP_YML: &str = "\
spring:
  application:
    name: gateway
server:
  port: 8080
management:
  server:
    port: 9090
";

const SERVICE_YAML: &str = "\
apiVersion: v1
kind: Service
metadata:
  name: gateway
spec:
  type: NodePort
  ports:
    - port: 80
      targetPort: 8080
      nodePort: 30080
";

const TILTFILE: &str = "\
docker_build('gateway', '.')
k8s_yaml('k8s/service.yaml')
k8s_resource('gateway', port_forwards=['18080:8080'])
";

fn module_files(dir: &str, app: Option<&str>, service: Option<&str>, tilt: Option<&str>) -> MemoryFiles {
    let config = PortsConfig::default();
    let root = Path::new(dir);
    let mut files = MemoryFiles::new().with_dir(root);
    if let Some(text) = app {
        files = files.with_file(root.join(&config.app_config), text);
    }
    if let Some(text) = service {
        files = files.with_file(root.join(&config.service_manifest), text);
    }
    if let Some(text) = tilt {
        files = files.with_file(root.join(&config.local_dev), text);
    }
    files
}

#[test]
fn test_app_config_takes_first_port() {
    assert_eq!(PortProbe::AppConfig.scan(APP_YML).as_deref(), Some("8080"));
}

#[test]
fn test_service_port_ignores_target_and_node_ports() {
    assert_eq!(PortProbe::ServicePort.scan(SERVICE_YAML).as_deref(), Some("80"));
    assert_eq!(PortProbe::NodePort.scan(SERVICE_YAML).as_deref(), Some("30080"));
}

#[test]
fn test_service_port_requires_ports_section() {
    let text = "metadata:\n  port: 1234\n";
    assert_eq!(PortProbe::ServicePort.scan(text), None);
}

#[test]
fn test_port_forward_variants() {
    assert_eq!(PortProbe::PortForward.scan(TILTFILE).as_deref(), Some("18080:8080"));
    assert_eq!(
        PortProbe::PortForward.scan("k8s_resource('x', port_forwards = [\"3000:3000\"])").as_deref(),
        Some("3000:3000")
    );
    assert_eq!(PortProbe::PortForward.scan("k8s_resource('x')"), None);
}

#[test]
fn test_combine_prefers_app_config() {
    let info = PortInfo::combine(Some(8080), Some(80), Some(30080), None);
    assert_eq!(
        info.primary,
        Some(PrimaryPort {
            port: 8080,
            source: PortSource::AppConfig
        })
    );
    assert_eq!(info.node_port, Some(30080));
}

#[test]
fn test_combine_falls_back_to_cluster_service() {
    let info = PortInfo::combine(None, Some(80), None, Some("8000:80".to_string()));
    insta::assert_snapshot!(info.to_string(), @"80 (cluster service), local port-forward 8000:80");
}

#[test]
fn test_node_port_equal_to_primary_is_dropped() {
    let info = PortInfo::combine(None, Some(30080), Some(30080), None);
    assert_eq!(info.node_port, None);
    insta::assert_snapshot!(info.to_string(), @"30080 (cluster service)");
}

#[test]
fn test_discover_all_sources() {
    let files = module_files("/ws/gateway", Some(APP_YML), Some(SERVICE_YAML), Some(TILTFILE));
    let lookup = discover(&files, Path::new("/ws/gateway"), &PortsConfig::default());
    insta::assert_snapshot!(
        lookup.to_string(),
        @"8080 (app config), node port 30080, local port-forward 18080:8080"
    );
    assert!(!lookup.is_failure());
}

#[test]
fn test_discover_without_any_file() {
    let files = module_files("/ws/web-frontend", None, None, None);
    let lookup = discover(&files, Path::new("/ws/web-frontend"), &PortsConfig::default());
    assert_eq!(lookup, PortLookup::Found(PortInfo::default()));
    insta::assert_snapshot!(lookup.to_string(), @"not available (no port config found)");
    assert!(!lookup.is_failure());
}

#[test]
fn test_discover_missing_module() {
    let files = module_files("/ws/gateway", Some(APP_YML), None, None);
    let lookup = discover(&files, Path::new("/ws/billing"), &PortsConfig::default());
    assert_eq!(lookup, PortLookup::ModuleNotFound);
    insta::assert_snapshot!(lookup.to_string(), @"not available (module not found)");
    assert!(lookup.is_failure());
}

#[test]
fn test_discover_ignores_out_of_range_port() {
    let files = module_files("/ws/gateway", Some("server:\n  port: 99999\n"), None, None);
    let lookup = discover(&files, Path::new("/ws/gateway"), &PortsConfig::default());
    assert_eq!(lookup, PortLookup::Found(PortInfo::default()));
}

#[test]
fn test_lookup_json_shape() {
    let lookup = PortLookup::Found(PortInfo::combine(Some(8080), None, None, None));
    insta::assert_snapshot!(
        serde_json::to_string(&lookup).unwrap(),
        @r#"{"status":"found","primary":{"port":8080,"source":"app config"},"node_port":null,"port_forward":null}"#
    );
}
