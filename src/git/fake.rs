// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory [`VersionControl`] for command tests.
//!
//! Directories must still exist on disk (commands check them), but all git
//! state lives here and every mutating call is recorded in `calls`.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::VersionControl;
use crate::error::{FleetResult, GitError};

#[derive(Debug, Clone)]
pub(crate) struct FakeRepo {
    pub(crate) branch: Option<String>,
    /// Tracked files differ from HEAD.
    pub(crate) dirty: bool,
    /// `status --porcelain` lines; paths become staged on `stage_all`.
    pub(crate) status: Vec<String>,
    pub(crate) staged: Vec<String>,
    /// Paths `stage_all` ignores (e.g. covered by .gitignore).
    pub(crate) ignored: BTreeSet<String>,
    pub(crate) remote_branches: BTreeSet<String>,
    pub(crate) fail_push: bool,
    pub(crate) fail_pull: bool,
    pub(crate) commits: Vec<String>,
}

impl Default for FakeRepo {
    fn default() -> Self {
        Self {
            branch: Some("main".to_string()),
            dirty: false,
            status: Vec::new(),
            staged: Vec::new(),
            ignored: BTreeSet::new(),
            remote_branches: ["main".to_string()].into_iter().collect(),
            fail_push: false,
            fail_pull: false,
            commits: Vec::new(),
        }
    }
}

impl FakeRepo {
    /// Repository with unstaged modifications to `paths`.
    pub(crate) fn with_changes(paths: &[&str]) -> Self {
        Self {
            dirty: true,
            status: paths.iter().map(|p| format!(" M {p}")).collect(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeGit {
    repos: RefCell<BTreeMap<PathBuf, FakeRepo>>,
    calls: RefCell<Vec<String>>,
}

impl FakeGit {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_repo(&self, dir: &Path, repo: FakeRepo) {
        self.repos.borrow_mut().insert(dir.to_path_buf(), repo);
    }

    pub(crate) fn repo(&self, dir: &Path) -> FakeRepo {
        self.repos.borrow()[dir].clone()
    }

    /// Mutating calls in order, e.g. `push main@gateway`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, dir: &Path, call: &str) {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(".");
        self.calls.borrow_mut().push(format!("{call}@{name}"));
    }

    fn with_repo<T>(&self, dir: &Path, f: impl FnOnce(&mut FakeRepo) -> FleetResult<T>) -> FleetResult<T> {
        let mut repos = self.repos.borrow_mut();
        let repo = repos.get_mut(dir).ok_or_else(|| GitError::RepoNotFound {
            path: dir.display().to_string(),
        })?;
        f(repo)
    }
}

fn failed(command: &str) -> crate::error::FleetError {
    GitError::CommandFailed {
        command: format!("git {command}"),
        message: "simulated failure".to_string(),
    }
    .into()
}

fn status_path(line: &str) -> String {
    line.get(3..).unwrap_or(line).to_string()
}

impl VersionControl for FakeGit {
    fn is_repository(&self, dir: &Path) -> bool {
        self.repos.borrow().contains_key(dir)
    }

    fn current_branch(&self, dir: &Path) -> FleetResult<Option<String>> {
        self.with_repo(dir, |repo| Ok(repo.branch.clone()))
    }

    fn has_uncommitted_changes(&self, dir: &Path) -> FleetResult<bool> {
        self.with_repo(dir, |repo| Ok(repo.dirty || !repo.staged.is_empty()))
    }

    fn status(&self, dir: &Path) -> FleetResult<Vec<String>> {
        self.with_repo(dir, |repo| Ok(repo.status.clone()))
    }

    fn stage_all(&self, dir: &Path) -> FleetResult<()> {
        self.record(dir, "add");
        self.with_repo(dir, |repo| {
            let paths: Vec<String> = repo.status.iter().map(|l| status_path(l)).collect();
            for path in paths {
                if !repo.ignored.contains(&path) && !repo.staged.contains(&path) {
                    repo.staged.push(path);
                }
            }
            Ok(())
        })
    }

    fn staged_files(&self, dir: &Path) -> FleetResult<Vec<String>> {
        self.with_repo(dir, |repo| Ok(repo.staged.clone()))
    }

    fn commit(&self, dir: &Path, message: &str) -> FleetResult<()> {
        self.record(dir, &format!("commit '{message}'"));
        self.with_repo(dir, |repo| {
            if repo.staged.is_empty() {
                return Err(failed("commit"));
            }
            repo.commits.push(message.to_string());
            repo.status.retain(|line| repo.ignored.contains(&status_path(line)));
            repo.staged.clear();
            repo.dirty = false;
            Ok(())
        })
    }

    fn remote_branch_exists(&self, dir: &Path, _remote: &str, branch: &str) -> FleetResult<bool> {
        self.with_repo(dir, |repo| Ok(repo.remote_branches.contains(branch)))
    }

    fn push(&self, dir: &Path, _remote: &str, branch: &str, force: bool) -> FleetResult<()> {
        let call = if force { "push --force" } else { "push" };
        self.record(dir, &format!("{call} {branch}"));
        self.with_repo(dir, |repo| {
            if repo.fail_push {
                Err(failed("push"))
            } else {
                Ok(())
            }
        })
    }

    fn pull(&self, dir: &Path, _remote: &str, branch: &str) -> FleetResult<()> {
        self.record(dir, &format!("pull {branch}"));
        self.with_repo(dir, |repo| {
            if repo.fail_pull {
                Err(failed("pull"))
            } else {
                Ok(())
            }
        })
    }
}
