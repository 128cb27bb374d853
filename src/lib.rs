// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            pull / sync / list
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |         workspace         |
//!              |  registry, module layout  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              config        git     ports
//!           TOML layers   gix/CLI   file scan
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, report    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod ports;
pub mod report;
pub mod workspace;
