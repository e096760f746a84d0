// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Generic document access.
//!
//! A training config is a tree of mappings, sequences and scalars. The text
//! is tokenized by `yaml-rust2` (JSON is accepted too, being a YAML subset)
//! and its parser events are assembled into a [`Value`] tree. No schema
//! resolution is applied: every scalar keeps the exact text it was written
//! with, so `True`, `0x10` and `"224"` reach the extractors as `"True"`,
//! `"0x10"` and `"224"`.
//!
//! A [`Document`] hands out path-aware [`Node`] cursors, so that every
//! extractor reports absent or malformed fields the same way:
//!
//! ```text
//! doc.root().get("data")?.get("labels")?.get("skeletons")?.index(0)?
//!     └── on failure: MissingField { path: "data.labels.skeletons[0]" }
//! ```

use crate::ConfigError;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use yaml_rust2::parser::{Event, EventReceiver, Parser};

/// A node of the raw document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A leaf, holding its literal text (quotes removed, escapes applied).
    Scalar(String),
    Sequence(Vec<Value>),
    /// Key/value pairs in document order.
    Mapping(Vec<(Value, Value)>),
}

impl Value {
    /// Convenience constructor for a scalar leaf.
    pub fn scalar(text: impl Into<String>) -> Self {
        Self::Scalar(text.into())
    }

    /// Looks up a mapping entry whose key is the scalar `key`.
    fn entry(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(entries) => entries
                .iter()
                .find(|(k, _)| matches!(k, Value::Scalar(text) if text == key))
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

/// A parsed config document whose root is guaranteed to be a mapping.
#[derive(Debug, Clone)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Reads and parses a document from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::DocumentRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_yaml(&content)
    }

    /// Parses a document from YAML or JSON text.
    ///
    /// The whole stream must be well-formed, but only its first document is
    /// used.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let mut builder = TreeBuilder::default();
        Parser::new(text.chars()).load(&mut builder, true)?;

        if builder.documents > 1 {
            tracing::debug!(
                "config stream holds {} documents; using the first",
                builder.documents
            );
        }
        match builder.first {
            Some(root) => Self::from_value(root),
            None => Err(ConfigError::EmptyDocument),
        }
    }

    /// Wraps an already-built tree. Fails unless the root is a mapping.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Mapping(_) => Ok(Self { root: value }),
            _ => Err(ConfigError::EmptyDocument),
        }
    }

    /// Wraps an already-built root mapping.
    pub fn from_mapping(entries: Vec<(Value, Value)>) -> Self {
        Self {
            root: Value::Mapping(entries),
        }
    }

    /// Returns a cursor positioned at the root mapping.
    pub fn root(&self) -> Node<'_> {
        Node {
            value: &self.root,
            path: String::new(),
        }
    }

    /// Shorthand for walking a chain of mapping keys from the root.
    pub fn at(&self, keys: &[&str]) -> Result<Node<'_>, ConfigError> {
        keys.iter().try_fold(self.root(), |node, key| node.get(key))
    }
}

/// Assembles parser events into [`Value`] trees.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    anchors: HashMap<usize, Value>,
    first: Option<Value>,
    documents: usize,
}

enum Frame {
    Sequence {
        anchor: usize,
        items: Vec<Value>,
    },
    Mapping {
        anchor: usize,
        entries: Vec<(Value, Value)>,
        key: Option<Value>,
    },
}

impl TreeBuilder {
    fn push(&mut self, node: Value, anchor: usize) {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
        match self.stack.last_mut() {
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping { entries, key, .. }) => match key.take() {
                Some(k) => entries.push((k, node)),
                None => *key = Some(node),
            },
            None => {
                self.documents += 1;
                if self.first.is_none() {
                    self.first = Some(node);
                }
            }
        }
    }
}

impl EventReceiver for TreeBuilder {
    fn on_event(&mut self, event: Event) {
        match event {
            Event::Scalar(text, _, anchor, ..) => self.push(Value::Scalar(text), anchor),
            Event::SequenceStart(anchor, ..) => self.stack.push(Frame::Sequence {
                anchor,
                items: Vec::new(),
            }),
            Event::MappingStart(anchor, ..) => self.stack.push(Frame::Mapping {
                anchor,
                entries: Vec::new(),
                key: None,
            }),
            Event::SequenceEnd | Event::MappingEnd => match self.stack.pop() {
                Some(Frame::Sequence { anchor, items }) => {
                    self.push(Value::Sequence(items), anchor)
                }
                Some(Frame::Mapping {
                    anchor, entries, ..
                }) => self.push(Value::Mapping(entries), anchor),
                None => {}
            },
            Event::Alias(id) => {
                // The parser rejects undefined aliases, so the lookup only
                // misses for anchors on nodes still being built.
                let node = self
                    .anchors
                    .get(&id)
                    .cloned()
                    .unwrap_or_else(|| Value::scalar(""));
                self.push(node, 0);
            }
            _ => {}
        }
    }
}

/// A cursor into a [`Document`] that remembers the dotted path it was reached by.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    /// Dotted path of this node (`""` for the root).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the underlying tree value.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Looks up a mapping key, failing with [`ConfigError::MissingField`].
    pub fn get(&self, key: &str) -> Result<Node<'a>, ConfigError> {
        self.try_get(key).ok_or_else(|| ConfigError::MissingField {
            path: self.child_path(key),
        })
    }

    /// Looks up a mapping key, returning `None` when absent or when this
    /// node is not a mapping.
    pub fn try_get(&self, key: &str) -> Option<Node<'a>> {
        self.value.entry(key).map(|value| Node {
            value,
            path: self.child_path(key),
        })
    }

    /// Looks up a sequence element, failing with [`ConfigError::MissingField`].
    pub fn index(&self, i: usize) -> Result<Node<'a>, ConfigError> {
        let path = format!("{}[{i}]", self.path);
        let item = match self.value {
            Value::Sequence(items) => items.get(i),
            _ => None,
        };
        match item {
            Some(value) => Ok(Node { value, path }),
            None => Err(ConfigError::MissingField { path }),
        }
    }

    /// Number of elements if this node is a sequence.
    pub fn sequence_len(&self) -> Option<usize> {
        match self.value {
            Value::Sequence(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Returns the literal text of this scalar.
    pub fn text(&self) -> Result<String, ConfigError> {
        match self.value {
            Value::Scalar(text) => Ok(text.clone()),
            _ => Err(ConfigError::TypeMismatch {
                path: self.path.clone(),
                expected: "scalar",
            }),
        }
    }

    /// Reads a sequence of scalars, preserving document order.
    pub fn strings(&self) -> Result<Vec<String>, ConfigError> {
        match self.value {
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    Node {
                        value,
                        path: format!("{}[{i}]", self.path),
                    }
                    .text()
                })
                .collect(),
            _ => Err(ConfigError::TypeMismatch {
                path: self.path.clone(),
                expected: "sequence",
            }),
        }
    }

    /// Strictly parses the scalar text as a number.
    ///
    /// No trimming, radix prefixes or locale handling: `" 224"`, `"0x10"`
    /// and `"224.0"` are all rejected as integers.
    pub fn parse_number<T: FromStr>(&self) -> Result<T, ConfigError> {
        let text = self.text()?;
        text.parse::<T>().map_err(|_| ConfigError::NumericParse {
            field: self.path.clone(),
            value: text,
        })
    }

    /// Total number of nodes in this subtree, this node included.
    ///
    /// Mapping keys count as nodes, so an empty mapping (or a bare null
    /// placeholder) counts 1 and `{a: 1}` counts 3.
    pub fn node_count(&self) -> usize {
        count_nodes(self.value)
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }
}

fn count_nodes(value: &Value) -> usize {
    match value {
        Value::Scalar(_) => 1,
        Value::Sequence(items) => 1 + items.iter().map(count_nodes).sum::<usize>(),
        Value::Mapping(entries) => {
            1 + entries
                .iter()
                .map(|(k, v)| count_nodes(k) + count_nodes(v))
                .sum::<usize>()
        }
    }
}
