// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The typed training configuration produced by the loader.

use crate::{ModelType, Skeleton, TargetSize};

/// Everything downstream code needs to know about a trained pose model.
///
/// Built by [`ConfigLoader`](crate::ConfigLoader); each load returns a fresh,
/// fully populated value owned by the caller.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrainingConfig {
    /// Architecture variant. Fixed at construction.
    #[serde(deserialize_with = "valid_model_type")]
    pub model_type: ModelType,
    /// Tracked anatomical points. A part's index is its ID.
    pub part_names: Vec<String>,
    /// Instance class labels; empty for variants without identity classes.
    pub class_names: Vec<String>,
    /// Part connectivity.
    pub skeleton: Skeleton,
    /// Model input resolution.
    pub target_size: TargetSize,
    /// Scale factor applied to input frames before inference.
    pub input_scaling: f32,
}

impl TrainingConfig {
    /// Creates an otherwise empty config for the given architecture.
    pub fn new(model_type: ModelType) -> Self {
        Self {
            model_type,
            part_names: Vec::new(),
            class_names: Vec::new(),
            skeleton: Skeleton::default(),
            target_size: TargetSize::default(),
            input_scaling: 1.0,
        }
    }

    pub fn num_parts(&self) -> usize {
        self.part_names.len()
    }

    pub fn num_classes(&self) -> usize {
        self.class_names.len()
    }

    /// Returns the ID of the named part.
    pub fn part_index(&self, name: &str) -> Option<usize> {
        self.part_names.iter().position(|p| p == name)
    }

    /// Returns a one-line summary for logs and display.
    pub fn summary(&self) -> String {
        format!(
            "TrainingConfig '{}': {} parts, {} classes, skeleton '{}' ({}), input {} @ {}x",
            self.model_type,
            self.num_parts(),
            self.num_classes(),
            self.skeleton.name,
            if self.skeleton.directed_edges {
                "directed"
            } else {
                "undirected"
            },
            self.target_size,
            self.input_scaling,
        )
    }
}

/// Rejects the pre-classification sentinel when reading a config back.
fn valid_model_type<'de, D>(deserializer: D) -> Result<ModelType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let model_type = <ModelType as serde::Deserialize>::deserialize(deserializer)?;
    if model_type.is_valid() {
        Ok(model_type)
    } else {
        Err(serde::de::Error::custom(format!(
            "'{model_type}' is not a loadable model type"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrainingConfig {
        let mut c = TrainingConfig::new(ModelType::SingleInstance);
        c.part_names = vec!["head".into(), "thorax".into(), "abdomen".into()];
        c.skeleton.name = "fly".into();
        c.target_size = TargetSize::new(192, 192);
        c.input_scaling = 0.5;
        c
    }

    #[test]
    fn test_new_is_empty() {
        let c = TrainingConfig::new(ModelType::Centroid);
        assert_eq!(c.model_type, ModelType::Centroid);
        assert_eq!(c.num_parts(), 0);
        assert_eq!(c.num_classes(), 0);
        assert!(c.skeleton.edges.is_empty());
    }

    #[test]
    fn test_part_index() {
        let c = sample();
        assert_eq!(c.part_index("head"), Some(0));
        assert_eq!(c.part_index("abdomen"), Some(2));
        assert_eq!(c.part_index("wing"), None);
    }

    #[test]
    fn test_summary() {
        let s = sample().summary();
        assert!(s.contains("single_instance"));
        assert!(s.contains("3 parts"));
        assert!(s.contains("skeleton 'fly' (undirected)"));
        assert!(s.contains("192x192 @ 0.5x"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let c = sample();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"model_type\":\"single_instance\""));
        let back: TrainingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_deserialize_rejects_invalid_model() {
        let json = serde_json::to_string(&sample())
            .unwrap()
            .replace("\"single_instance\"", "\"invalid_model\"");
        let err = serde_json::from_str::<TrainingConfig>(&json).unwrap_err();
        assert!(err.to_string().contains("invalid_model"));
    }
}
