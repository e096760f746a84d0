// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Architecture-specific extraction of part and class vocabularies.
//!
//! Each variant keeps its vocabulary in a differently shaped subtree:
//!
//! | Variant            | Parts                                                  | Classes                                              |
//! |--------------------|--------------------------------------------------------|------------------------------------------------------|
//! | `single_instance`  | `model.heads.single_instance.part_names`               | none                                                 |
//! | `multi_instance`   | `model.heads.multi_class_topdown.confmaps.part_names`  | `model.heads.multi_class_topdown.class_vectors.classes` |
//! | `centroid`         | not extracted                                          | not extracted                                        |
//! | `centered_instance`| not extracted                                          | not extracted                                        |

use crate::document::Node;
use crate::skeleton::extract_skeleton;
use crate::{ConfigError, Document, ModelType, TrainingConfig};

/// Fills `part_names`, `class_names` and `skeleton` according to the
/// config's architecture. Exactly one extractor runs per call.
pub fn extract_model(config: &mut TrainingConfig, document: &Document) -> Result<(), ConfigError> {
    match config.model_type {
        ModelType::SingleInstance => extract_single_instance(config, document),
        ModelType::MultiInstance => extract_multi_instance(config, document),
        ModelType::Centroid | ModelType::CenteredInstance => {
            // TODO: centroid and centered-instance heads carry an anchor part
            // and their own part list; extract them once the expected fields
            // for top-down models are settled.
            tracing::debug!(
                "no vocabulary extraction for '{}' models",
                config.model_type
            );
            Ok(())
        }
        ModelType::InvalidModel => Err(ConfigError::NoModelFound {
            location: crate::model_type::HEADS_PATH.to_string(),
        }),
    }
}

fn heads(document: &Document) -> Result<Node<'_>, ConfigError> {
    document.at(&["model", "heads"])
}

fn extract_single_instance(
    config: &mut TrainingConfig,
    document: &Document,
) -> Result<(), ConfigError> {
    config.part_names = heads(document)?
        .get("single_instance")?
        .get("part_names")?
        .strings()?;
    config.skeleton = extract_skeleton(document)?;
    Ok(())
}

fn extract_multi_instance(
    config: &mut TrainingConfig,
    document: &Document,
) -> Result<(), ConfigError> {
    let topdown = heads(document)?.get("multi_class_topdown")?;
    config.part_names = topdown.get("confmaps")?.get("part_names")?.strings()?;
    config.class_names = topdown.get("class_vectors")?.get("classes")?.strings()?;
    config.skeleton = extract_skeleton(document)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKELETON: &str = "data:
  labels:
    skeletons:
      - directed: \"true\"
        graph:
          name: mouse
";

    fn doc(model: &str) -> Document {
        Document::from_yaml(&format!("{SKELETON}{model}")).unwrap()
    }

    #[test]
    fn test_single_instance() {
        let d = doc("model:
  heads:
    single_instance:
      part_names: [head, tail]
");
        let mut c = TrainingConfig::new(ModelType::SingleInstance);
        extract_model(&mut c, &d).unwrap();
        assert_eq!(c.part_names, vec!["head", "tail"]);
        assert!(c.class_names.is_empty());
        assert_eq!(c.skeleton.name, "mouse");
        assert!(c.skeleton.directed_edges);
    }

    #[test]
    fn test_multi_instance() {
        let d = doc("model:
  heads:
    multi_class_topdown:
      confmaps:
        part_names: [head, tail]
      class_vectors:
        classes: [mouse1, mouse2]
");
        let mut c = TrainingConfig::new(ModelType::MultiInstance);
        extract_model(&mut c, &d).unwrap();
        assert_eq!(c.part_names, vec!["head", "tail"]);
        assert_eq!(c.class_names, vec!["mouse1", "mouse2"]);
        assert_eq!(c.skeleton.name, "mouse");
    }

    #[test]
    fn test_multi_instance_missing_classes() {
        let d = doc("model:
  heads:
    multi_class_topdown:
      confmaps:
        part_names: [head, tail]
");
        let mut c = TrainingConfig::new(ModelType::MultiInstance);
        match extract_model(&mut c, &d) {
            Err(ConfigError::MissingField { path }) => {
                assert_eq!(path, "model.heads.multi_class_topdown.class_vectors")
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_single_instance_missing_part_names() {
        let d = doc("model:
  heads:
    single_instance:
      sigma: 2.5
");
        let mut c = TrainingConfig::new(ModelType::SingleInstance);
        assert!(matches!(
            extract_model(&mut c, &d),
            Err(ConfigError::MissingField { path }) if path == "model.heads.single_instance.part_names"
        ));
    }

    #[test]
    fn test_top_down_stages_extract_nothing() {
        let d = Document::from_yaml("model:\n  heads:\n    centroid: {anchor_part: thorax}\n")
            .unwrap();
        for model_type in [ModelType::Centroid, ModelType::CenteredInstance] {
            let mut c = TrainingConfig::new(model_type);
            extract_model(&mut c, &d).unwrap();
            assert!(c.part_names.is_empty());
            assert!(c.class_names.is_empty());
            assert!(c.skeleton.edges.is_empty());
        }
    }

    #[test]
    fn test_invalid_model_is_rejected() {
        let d = doc("model:\n  heads: {}\n");
        let mut c = TrainingConfig::new(ModelType::InvalidModel);
        assert!(matches!(
            extract_model(&mut c, &d),
            Err(ConfigError::NoModelFound { .. })
        ));
    }
}
