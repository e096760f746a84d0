// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # pose-cfg
//!
//! Command-line front-end for the `pose-config` loader.
//!
//! ## Usage
//! ```bash
//! # Print a breakdown of a training config
//! pose-cfg inspect --file ./models/fly32/training_config.json
//!
//! # Export the interpreted config as JSON
//! pose-cfg inspect --file ./models/fly32/training_config.json --json
//!
//! # Print only the architecture variant
//! pose-cfg classify --file ./models/fly32/training_config.json
//! ```

mod commands;
mod settings;

use clap::{Parser, Subcommand};
use settings::{OutputFormat, Settings};

#[derive(Parser)]
#[command(
    name = "pose-cfg",
    about = "Inspect pose-estimation training configuration files",
    version,
    author
)]
struct Cli {
    /// Path to a TOML settings file (CLI arguments take precedence).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a training config and print its parts, classes, skeleton and preprocessing.
    Inspect {
        /// Path to the training config (YAML or JSON).
        #[arg(short, long)]
        file: std::path::PathBuf,

        /// Print the interpreted config as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print which model architecture a training config describes.
    Classify {
        /// Path to the training config (YAML or JSON).
        #[arg(short, long)]
        file: std::path::PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    commands::init_tracing(cli.verbose, &settings.log_level);

    match cli.command {
        Commands::Inspect { file, json } => {
            let format = if json {
                OutputFormat::Json
            } else {
                settings.format
            };
            commands::inspect::execute(file, format)
        }
        Commands::Classify { file } => commands::classify::execute(file),
    }
}
