// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CLI settings loaded from an optional TOML file.
//!
//! # TOML Format
//! ```toml
//! format = "json"
//! log_level = "debug"
//! ```

use anyhow::Context;
use std::path::Path;

/// How `inspect` renders a loaded config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings shared by all subcommands.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output format for `inspect`.
    pub format: OutputFormat,
    /// Log filter used when no `-v` flag is given (e.g. `"warn"`, `"pose_config=debug"`).
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read settings '{}'", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parses settings from a TOML string. Missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).context("TOML parse error in settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let s = Settings::default();
        assert_eq!(s.format, OutputFormat::Text);
        assert_eq!(s.log_level, "warn");
    }

    #[test]
    fn test_from_toml() {
        let s = Settings::from_toml("format = \"json\"\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(s.format, OutputFormat::Json);
        assert_eq!(s.log_level, "debug");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let s = Settings::from_toml("format = \"json\"\n").unwrap();
        assert_eq!(s.format, OutputFormat::Json);
        assert_eq!(s.log_level, "warn");
    }

    #[test]
    fn test_unknown_format() {
        assert!(Settings::from_toml("format = \"xml\"\n").is_err());
    }
}
