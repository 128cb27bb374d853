// repo-fleet: multi-module git helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config command: shows where settings came from and their effective values.

use crate::config::Config;

/// Display loaded configuration files followed by the effective options.
pub fn run_config_command(config: &Config, config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded, using defaults");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
    println!();
    for line in config.format_options() {
        println!("{line}");
    }
}
