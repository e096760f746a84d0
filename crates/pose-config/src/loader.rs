// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Training-config loading: the top-level pipeline.
//!
//! ```text
//! Document ── classify ──► ModelType
//!    │                        │ TrainingConfig::new
//!    ├── extract_model ──────►│ parts, classes, skeleton
//!    └── extract_preprocessing►│ target size, input scaling
//!                             ▼
//!                       TrainingConfig
//! ```
//!
//! Any stage failing aborts the whole load; no partially filled config is
//! ever returned.

use crate::extract::extract_model;
use crate::model_type::classify;
use crate::preprocessing::extract_preprocessing;
use crate::{ConfigError, Document, TrainingConfig};
use std::path::Path;

/// Loads [`TrainingConfig`]s from files, text, or parsed documents.
///
/// # Example
/// ```no_run
/// use pose_config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load(Path::new("./models/fly32/training_config.json")).unwrap();
/// println!("{}", config.summary());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads, parses and interprets a config file.
    pub fn load(path: &Path) -> Result<TrainingConfig, ConfigError> {
        tracing::debug!("loading training config from '{}'", path.display());
        let document = Document::from_file(path)?;
        Self::from_document(&document)
    }

    /// Parses and interprets config text (YAML or JSON).
    pub fn from_yaml(text: &str) -> Result<TrainingConfig, ConfigError> {
        let document = Document::from_yaml(text)?;
        Self::from_document(&document)
    }

    /// Interprets an already-parsed document.
    ///
    /// Steps:
    /// 1. Classify the architecture from `model.heads`.
    /// 2. Extract the variant's parts, classes and skeleton.
    /// 3. Extract preprocessing parameters from `data.preprocessing`.
    pub fn from_document(document: &Document) -> Result<TrainingConfig, ConfigError> {
        let mut config = TrainingConfig::new(classify(document)?);
        extract_model(&mut config, document)?;

        let preprocessing = extract_preprocessing(document)?;
        config.target_size = preprocessing.target_size;
        config.input_scaling = preprocessing.input_scaling;

        tracing::info!("{}", config.summary());
        Ok(config)
    }
}

/// Loads a training config from a file. See [`ConfigLoader::load`].
pub fn load_training_config(path: &Path) -> Result<TrainingConfig, ConfigError> {
    ConfigLoader::load(path)
}
