// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Model architecture variants and the classifier that picks one.
//!
//! A training config carries one section per architecture under
//! `model.heads`. Unused heads are left in the document as empty
//! placeholders, so a section only counts as present when its subtree holds
//! more than the section node itself. Exactly one section must be present.

use crate::{ConfigError, Document};

/// Location of the architecture sections inside a config document.
pub const HEADS_PATH: &str = "model.heads";

/// The architecture of a trained pose model.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// Pre-classification sentinel. Never appears in a loaded config.
    #[default]
    InvalidModel,
    /// One animal per frame; confidence maps over all parts.
    SingleInstance,
    /// First stage of a top-down pipeline: instance centroids only.
    Centroid,
    /// Second stage of a top-down pipeline: parts around a given centroid.
    CenteredInstance,
    /// Multiple animals with identity classes.
    MultiInstance,
}

impl ModelType {
    /// The four valid variants, in classification order.
    pub const ALL: [ModelType; 4] = [
        Self::SingleInstance,
        Self::Centroid,
        Self::CenteredInstance,
        Self::MultiInstance,
    ];

    /// Key of this variant's section under `model.heads`.
    pub fn section_name(&self) -> Option<&'static str> {
        match self {
            Self::InvalidModel => None,
            Self::SingleInstance => Some("single_instance"),
            Self::Centroid => Some("centroid"),
            Self::CenteredInstance => Some("centered_instance"),
            Self::MultiInstance => Some("multi_instance"),
        }
    }

    /// Returns a human-readable label.
    pub fn as_str(&self) -> &'static str {
        self.section_name().unwrap_or("invalid_model")
    }

    /// `false` only for [`ModelType::InvalidModel`].
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::InvalidModel)
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determines which architecture a document describes.
///
/// # Errors
/// - [`ConfigError::MissingField`] if `model.heads` is absent.
/// - [`ConfigError::NoModelFound`] if no section is populated.
/// - [`ConfigError::AmbiguousModel`] if more than one is.
pub fn classify(document: &Document) -> Result<ModelType, ConfigError> {
    let heads = document.at(&["model", "heads"])?;

    let found: Vec<ModelType> = ModelType::ALL
        .into_iter()
        .filter(|model_type| {
            model_type
                .section_name()
                .and_then(|section| heads.try_get(section))
                .is_some_and(|node| node.node_count() > 1)
        })
        .collect();

    match found.as_slice() {
        [] => Err(ConfigError::NoModelFound {
            location: HEADS_PATH.to_string(),
        }),
        [model_type] => {
            tracing::debug!("classified config as '{model_type}'");
            Ok(*model_type)
        }
        _ => Err(ConfigError::AmbiguousModel { found }),
    }
}
