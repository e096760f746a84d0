// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Skeleton topology: which parts connect to which.
//!
//! Only the skeleton's name and directedness are read from the document.
//! Edge data is not extracted yet, so [`Skeleton::edges`] is always empty
//! after loading.

use crate::{ConfigError, Document};

/// A connection between two parts, by index into the config's part names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Link {
    /// Index of the part the edge starts from.
    pub source: usize,
    /// Index of the part the edge points to.
    pub target: usize,
}

impl Link {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

/// Named part connectivity of a pose model.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Skeleton {
    /// Identifying name of the topology.
    pub name: String,
    /// Whether edges carry a direction (source → target).
    pub directed_edges: bool,
    /// Part-pair connections, in document order.
    pub edges: Vec<Link>,
}

impl Skeleton {
    /// Number of edges in the skeleton.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

/// Reads the first skeleton definition at `data.labels.skeletons[0]`.
///
/// `directed` is true only when its text is exactly `"true"`.
pub fn extract_skeleton(document: &Document) -> Result<Skeleton, ConfigError> {
    let skeletons = document.at(&["data", "labels", "skeletons"])?;
    if let Some(count) = skeletons.sequence_len().filter(|&n| n > 1) {
        tracing::warn!("config defines {count} skeletons; only the first is used");
    }

    let first = skeletons.index(0)?;
    let directed_edges = first.get("directed")?.text()? == "true";
    let name = first.get("graph")?.get("name")?.text()?;

    // TODO: read edges from the skeleton's link list once its node/edge
    // encoding is pinned down by the config schema.
    Ok(Skeleton {
        name,
        directed_edges,
        edges: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skeleton_doc(directed: &str) -> Document {
        let yaml = format!(
            "data:\n  labels:\n    skeletons:\n      - directed: {directed}\n        graph:\n          name: fly32\n"
        );
        Document::from_yaml(&yaml).unwrap()
    }

    #[test]
    fn test_extract_name_and_directed() {
        let s = extract_skeleton(&skeleton_doc("\"true\"")).unwrap();
        assert_eq!(s.name, "fly32");
        assert!(s.directed_edges);
        assert!(s.edges.is_empty());
    }

    #[test]
    fn test_unquoted_true_is_directed() {
        assert!(extract_skeleton(&skeleton_doc("true")).unwrap().directed_edges);
    }

    #[test]
    fn test_only_exact_true_is_directed() {
        for text in ["\"True\"", "\"TRUE\"", "\"yes\"", "\"\"", "\"1\"", "false"] {
            let s = extract_skeleton(&skeleton_doc(text)).unwrap();
            assert!(!s.directed_edges, "'{text}' must not be directed");
        }
    }

    #[test]
    fn test_unquoted_case_variants_are_not_directed() {
        for text in ["True", "TRUE", "yes", "on"] {
            let s = extract_skeleton(&skeleton_doc(text)).unwrap();
            assert!(!s.directed_edges, "unquoted '{text}' must not be directed");
        }
    }

    #[test]
    fn test_no_skeletons() {
        let doc = Document::from_yaml("data:\n  labels:\n    skeletons: []\n").unwrap();
        match extract_skeleton(&doc) {
            Err(ConfigError::MissingField { path }) => {
                assert_eq!(path, "data.labels.skeletons[0]")
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_graph_name() {
        let doc = Document::from_yaml(
            "data:\n  labels:\n    skeletons:\n      - directed: \"false\"\n        graph: {}\n",
        )
        .unwrap();
        assert!(matches!(
            extract_skeleton(&doc),
            Err(ConfigError::MissingField { path }) if path == "data.labels.skeletons[0].graph.name"
        ));
    }

    #[test]
    fn test_only_first_skeleton_is_read() {
        let doc = Document::from_yaml(
            "data:\n  labels:\n    skeletons:\n      - directed: \"false\"\n        graph: {name: first}\n      - directed: \"true\"\n        graph: {name: second}\n",
        )
        .unwrap();
        let s = extract_skeleton(&doc).unwrap();
        assert_eq!(s.name, "first");
        assert!(!s.directed_edges);
    }

    #[test]
    fn test_default_skeleton() {
        let s = Skeleton::default();
        assert!(s.name.is_empty());
        assert!(!s.directed_edges);
        assert_eq!(s.num_edges(), 0);
    }
}
