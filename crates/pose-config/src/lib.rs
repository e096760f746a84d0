// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # pose-config
//!
//! Interprets the training configuration written alongside a trained
//! pose-estimation model and produces a typed, validated [`TrainingConfig`].
//!
//! - [`Document`] / [`Node`] — path-aware access to the raw YAML/JSON tree.
//! - [`ModelType`] / [`classify`] — which of the four architectures the
//!   document describes (exactly one must be populated under `model.heads`).
//! - [`extract_model`] — architecture-specific part/class extraction.
//! - [`Skeleton`] / [`extract_skeleton`] — topology name and directedness.
//! - [`TargetSize`] / [`extract_preprocessing`] — input resolution and scaling.
//! - [`ConfigLoader`] — runs the stages in order and returns the config.
//!
//! Every failure is a [`ConfigError`] naming the rule that was broken and,
//! where one is involved, the dotted field path (`data.preprocessing.target_width`).
//!
//! # Example
//! ```no_run
//! use pose_config::{ConfigLoader, ModelType};
//! use std::path::Path;
//!
//! let config = ConfigLoader::load(Path::new("./models/mice/training_config.json")).unwrap();
//! if config.model_type == ModelType::MultiInstance {
//!     println!("identities: {:?}", config.class_names);
//! }
//! ```

mod config;
pub mod document;
mod error;
mod extract;
mod loader;
pub mod model_type;
mod preprocessing;
mod skeleton;

pub use config::TrainingConfig;
pub use document::{Document, Node, Value};
pub use error::ConfigError;
pub use extract::extract_model;
pub use loader::{load_training_config, ConfigLoader};
pub use model_type::{classify, ModelType};
pub use preprocessing::{extract_preprocessing, Preprocessing, TargetSize};
pub use skeleton::{extract_skeleton, Link, Skeleton};
