// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Image preprocessing parameters: the model's input resolution and the
//! scale factor applied to frames before inference.

use crate::{ConfigError, Document};

/// Input resolution expected by the model, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TargetSize {
    pub width: i32,
    pub height: i32,
}

impl TargetSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Values read from `data.preprocessing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preprocessing {
    pub target_size: TargetSize,
    pub input_scaling: f32,
}

/// Reads `target_width`, `target_height` and `input_scaling` from
/// `data.preprocessing`.
///
/// Values are parsed strictly from their text; no range checks are applied.
pub fn extract_preprocessing(document: &Document) -> Result<Preprocessing, ConfigError> {
    let section = document.at(&["data", "preprocessing"])?;

    let width = section.get("target_width")?.parse_number::<i32>()?;
    let height = section.get("target_height")?.parse_number::<i32>()?;
    let input_scaling = section.get("input_scaling")?.parse_number::<f32>()?;

    Ok(Preprocessing {
        target_size: TargetSize::new(width, height),
        input_scaling,
    })
}
