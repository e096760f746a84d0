// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

pub mod classify;
pub mod inspect;

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `-v` maps to `info`, `-vv` to `debug`, `-vvv` to `trace`; with no flag
/// the settings' `log_level` applies.
pub fn init_tracing(verbose: u8, default_level: &str) {
    let filter = match verbose {
        0 => default_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
