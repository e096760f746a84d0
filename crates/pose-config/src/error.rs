// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for training-config loading.

use crate::ModelType;
use std::path::PathBuf;

/// Errors that can occur while interpreting a training-config document.
///
/// Every variant is terminal for the current load: no stage catches and
/// downgrades an error raised by a stage it calls.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{}': {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document text is not well-formed YAML/JSON.
    #[error("failed to parse config document: {0}")]
    DocumentParse(#[from] yaml_rust2::scanner::ScanError),

    /// The document holds no root mapping.
    #[error("the specified pose config file is empty")]
    EmptyDocument,

    /// None of the known architecture sections is populated.
    #[error("no model found: expected exactly one populated section under '{location}'")]
    NoModelFound { location: String },

    /// More than one architecture section is populated.
    #[error("multiple model heads found: {}", format_found(.found))]
    AmbiguousModel { found: Vec<ModelType> },

    /// A required node was absent.
    #[error("missing expected field '{path}'")]
    MissingField { path: String },

    /// A node exists but has the wrong shape (e.g. a mapping where a list was expected).
    #[error("field '{path}' is not a {expected}")]
    TypeMismatch { path: String, expected: &'static str },

    /// A numeric field holds text that does not parse.
    #[error("field '{field}' is not a valid number: '{value}'")]
    NumericParse { field: String, value: String },
}

fn format_found(found: &[ModelType]) -> String {
    found
        .iter()
        .map(ModelType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
