// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `pose-cfg classify` command: print the model architecture only.
//!
//! Runs just the classification stage, so configs whose vocabulary or
//! preprocessing sections are incomplete can still be identified.

use pose_config::{classify, Document};
use std::path::PathBuf;

pub fn execute(file: PathBuf) -> anyhow::Result<()> {
    let document = Document::from_file(&file)?;
    let model_type = classify(&document).map_err(|e| {
        anyhow::anyhow!("cannot classify '{}': {e}", file.display())
    })?;
    println!("{model_type}");
    Ok(())
}
