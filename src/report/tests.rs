// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BatchReport, ExitStatus, OperationResult};

#[test]
fn test_empty_report_is_success() {
    let report = BatchReport::new();
    assert_eq!(report.total(), 0);
    assert_eq!(report.exit_status(), ExitStatus::Success);
    insta::assert_snapshot!(report.summary("Pull operation completed").join("\n"), @r"
    Pull operation completed
    Summary: 0/0 succeeded
    ");
}

#[test]
fn test_summary_lists_failures_in_order() {
    let mut report = BatchReport::new();
    report.push(OperationResult::failure("b", "directory not found"));
    report.push(OperationResult::success_with("a", "nothing to sync"));
    report.push(OperationResult::failure("c", "detached HEAD"));

    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), vec!["b", "c"]);
    assert_eq!(report.exit_status(), ExitStatus::Failure);
    insta::assert_snapshot!(report.summary("Sync operation completed").join("\n"), @r"
    Sync operation completed
    Summary: 1/3 succeeded
    Failed: b, c
    ");
}

#[test]
fn test_result_display() {
    insta::assert_snapshot!(OperationResult::success("gateway").to_string(), @"gateway: ok");
    insta::assert_snapshot!(
        OperationResult::failure("web-frontend", "uncommitted changes").to_string(),
        @"web-frontend: FAILED (uncommitted changes)"
    );
}

#[test]
fn test_exit_codes() {
    assert_eq!(ExitStatus::Success.code(), 0);
    assert_eq!(ExitStatus::Failure.code(), 1);
    assert_eq!(ExitStatus::Usage.code(), 2);
}
