// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, FleetError, FleetResult, GitError, is_usage_error, usage};
use anyhow::Context;

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "modules".to_string(),
        key: "names".to_string(),
        message: "duplicate module 'gateway'".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'names' in section '[modules]': duplicate module 'gateway'"
    );
}

#[test]
fn test_git_error_display() {
    let err: FleetError = GitError::CommandFailed {
        command: "git push origin main".to_string(),
        message: "rejected".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"git error: git push origin main failed: rejected");
}

#[test]
fn test_fleet_error_size() {
    let size = std::mem::size_of::<FleetError>();
    assert!(size <= 24, "FleetError is {size} bytes, expected <= 24");
}

#[test]
fn test_fleet_result_size() {
    let size = std::mem::size_of::<FleetResult<()>>();
    assert!(size <= 24, "FleetResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_usage_error_survives_context() {
    let result: FleetResult<()> = Err(usage("invalid module: nope"));
    let err = result.context("while validating").unwrap_err();
    assert!(is_usage_error(&err));
}

#[test]
fn test_non_usage_error_is_not_usage() {
    let err = anyhow::Error::from(FleetError::from(GitError::RepoNotFound {
        path: "/srv/ws/gateway".to_string(),
    }));
    assert!(!is_usage_error(&err));
    assert!(!is_usage_error(&anyhow::anyhow!("plain")));
}
