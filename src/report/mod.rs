// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-target results and the end-of-run tally.
//!
//! ```text
//! target 1 --> OperationResult --+
//! target 2 --> OperationResult --+--> BatchReport --> summary lines
//! target N --> OperationResult --+        |
//!                                         v
//!                                   ExitStatus (0 / 1)
//! ```

use serde::Serialize;
use std::fmt;
use std::process::ExitCode;

/// Process exit status shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Everything succeeded.
    Success,
    /// At least one target failed after validation passed.
    Failure,
    /// Invalid invocation; nothing was done.
    Usage,
}

impl ExitStatus {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Usage => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

/// Outcome of one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
}

/// Result of processing one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub target: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OperationResult {
    pub fn success(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            outcome: Outcome::Success,
            message: None,
        }
    }

    pub fn success_with(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            outcome: Outcome::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            outcome: Outcome::Failure,
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_success() { "ok" } else { "FAILED" };
        match &self.message {
            Some(message) => write!(f, "{}: {mark} ({message})", self.target),
            None => write!(f, "{}: {mark}", self.target),
        }
    }
}

/// Results of one command invocation, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    results: Vec<OperationResult>,
}

impl BatchReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: OperationResult) {
        self.results.push(result);
    }

    #[must_use]
    pub fn results(&self) -> &[OperationResult] {
        &self.results
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Targets that failed, in processing order.
    #[must_use]
    pub fn failed(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.is_success())
            .map(|r| r.target.as_str())
            .collect()
    }

    #[must_use]
    pub fn exit_status(&self) -> ExitStatus {
        if self.failed().is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }

    /// Summary block printed after the last target.
    #[must_use]
    pub fn summary(&self, completed: &str) -> Vec<String> {
        let mut lines = vec![
            completed.to_string(),
            format!("Summary: {}/{} succeeded", self.succeeded(), self.total()),
        ];
        let failed = self.failed();
        if !failed.is_empty() {
            lines.push(format!("Failed: {}", failed.join(", ")));
        }
        lines
    }
}

#[cfg(test)]
mod tests;
