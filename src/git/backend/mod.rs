// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! VersionControl --> SystemGit
//!                      reads:  gix (no subprocess)
//!                      writes: git CLI (GIT_TERMINAL_PROMPT=0)
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

use crate::error::{FleetResult, GitError, GixError, ProcessError};

/// The git operations the commands rely on.
///
/// Implementors must not depend on the process working directory; `dir` is
/// always the checkout to operate on.
pub trait VersionControl {
    /// Whether `dir` is itself a git checkout.
    fn is_repository(&self, dir: &Path) -> bool;

    /// Current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be opened or HEAD cannot be read.
    fn current_branch(&self, dir: &Path) -> FleetResult<Option<String>>;

    /// Whether tracked files differ from HEAD (staged or unstaged).
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be run.
    fn has_uncommitted_changes(&self, dir: &Path) -> FleetResult<bool>;

    /// Short status lines (`XY path`), including untracked files.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git status` fails.
    fn status(&self, dir: &Path) -> FleetResult<Vec<String>>;

    /// Stage every change in the tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git add` fails.
    fn stage_all(&self, dir: &Path) -> FleetResult<()>;

    /// Paths currently staged for commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the index cannot be compared with HEAD.
    fn staged_files(&self, dir: &Path) -> FleetResult<Vec<String>>;

    /// Commit the staged changes.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git commit` fails.
    fn commit(&self, dir: &Path, message: &str) -> FleetResult<()>;

    /// Whether `branch` exists on `remote`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote is not configured or unreachable.
    fn remote_branch_exists(&self, dir: &Path, remote: &str, branch: &str) -> FleetResult<bool>;

    /// Push `branch` to `remote`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push is rejected or fails.
    fn push(&self, dir: &Path, remote: &str, branch: &str, force: bool) -> FleetResult<()>;

    /// Pull `branch` from `remote`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pull fails.
    fn pull(&self, dir: &Path, remote: &str, branch: &str) -> FleetResult<()>;
}

/// Production backend: gix for queries, the git executable for everything else.
#[derive(Debug, Clone)]
pub struct SystemGit {
    git: PathBuf,
}

impl SystemGit {
    /// Use a specific git executable.
    #[must_use]
    pub fn new(git: impl Into<PathBuf>) -> Self {
        Self { git: git.into() }
    }

    /// Find `git` on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if git is not installed.
    pub fn locate() -> FleetResult<Self> {
        let git = which::which("git").map_err(|_| ProcessError::ExecutableNotFound {
            name: "git".to_string(),
        })?;
        debug!(git = %git.display(), "using git executable");
        Ok(Self::new(git))
    }

    fn output(&self, args: &[&str], cwd: &Path) -> FleetResult<Output> {
        debug!(cwd = %cwd.display(), "git {}", args.join(" "));
        Command::new(&self.git)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| {
                ProcessError::SpawnFailed {
                    command: format!("git {}", args.join(" ")),
                    source,
                }
                .into()
            })
    }

    /// Run git and return stdout untrimmed; non-zero exit is an error.
    fn run(&self, args: &[&str], cwd: &Path) -> FleetResult<String> {
        let output = self.output(args, cwd)?;
        if !output.status.success() {
            return Err(command_failed(args, &output).into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn lines(&self, args: &[&str], cwd: &Path) -> FleetResult<Vec<String>> {
        Ok(self
            .run(args, cwd)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ToString::to_string)
            .collect())
    }
}

fn command_failed(args: &[&str], output: &Output) -> GitError {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let message = if stderr.is_empty() {
        output
            .status
            .code()
            .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"))
    } else {
        stderr
    };
    GitError::CommandFailed {
        command: format!("git {}", args.join(" ")),
        message,
    }
}

impl VersionControl for SystemGit {
    fn is_repository(&self, dir: &Path) -> bool {
        gix::open(dir).is_ok()
    }

    fn current_branch(&self, dir: &Path) -> FleetResult<Option<String>> {
        let repo = gix::open(dir).map_err(|e| match e {
            gix::open::Error::NotARepository { .. } => GitError::RepoNotFound {
                path: dir.display().to_string(),
            },
            other => GitError::Gix(GixError::Open(Box::new(other))),
        })?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn has_uncommitted_changes(&self, dir: &Path) -> FleetResult<bool> {
        // Stat-only differences would otherwise show up as changes. A failed
        // refresh only makes diff-index stricter.
        let refresh = self.output(&["update-index", "-q", "--refresh"], dir)?;
        if !refresh.status.success() {
            debug!(cwd = %dir.display(), status = %refresh.status, "index refresh failed");
        }
        let output = self.output(&["diff-index", "--quiet", "HEAD", "--"], dir)?;
        Ok(!output.status.success())
    }

    fn status(&self, dir: &Path) -> FleetResult<Vec<String>> {
        self.lines(&["status", "--porcelain"], dir)
    }

    fn stage_all(&self, dir: &Path) -> FleetResult<()> {
        self.run(&["add", "-A"], dir)?;
        Ok(())
    }

    fn staged_files(&self, dir: &Path) -> FleetResult<Vec<String>> {
        self.lines(&["diff", "--cached", "--name-only"], dir)
    }

    fn commit(&self, dir: &Path, message: &str) -> FleetResult<()> {
        self.run(&["commit", "--quiet", "-m", message], dir)?;
        Ok(())
    }

    fn remote_branch_exists(&self, dir: &Path, remote: &str, branch: &str) -> FleetResult<bool> {
        let refname = format!("refs/heads/{branch}");
        let args = ["ls-remote", "--exit-code", "--heads", remote, refname.as_str()];
        let output = self.output(&args, dir)?;
        // ls-remote --exit-code reports "no matching refs" as status 2.
        match output.status.code() {
            Some(0) => Ok(true),
            Some(2) => Ok(false),
            _ => Err(command_failed(&args, &output).into()),
        }
    }

    fn push(&self, dir: &Path, remote: &str, branch: &str, force: bool) -> FleetResult<()> {
        let mut args = vec!["push", "--quiet"];
        if force {
            args.push("--force");
        }
        args.extend([remote, branch]);
        self.run(&args, dir)?;
        Ok(())
    }

    fn pull(&self, dir: &Path, remote: &str, branch: &str) -> FleetResult<()> {
        self.run(&["pull", "--quiet", remote, branch], dir)?;
        Ok(())
    }
}
