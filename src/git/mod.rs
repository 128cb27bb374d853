// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!   cmd::pull   cmd::sync   cmd::list
//!         \         |         /
//!          v        v        v
//!     ,--------------------------,
//!     |  VersionControl (trait)  |
//!     '------------+-------------'
//!                  |
//!                  v
//!              SystemGit
//!        gix:  is_repository, current_branch
//!        CLI:  status, add, commit, push, pull,
//!              diff-index, ls-remote
//! ```
//!
//! Every call takes the working directory explicitly; the process cwd is
//! never changed.

pub mod backend;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::{SystemGit, VersionControl};
