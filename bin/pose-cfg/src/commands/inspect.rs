// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `pose-cfg inspect` command: display an interpreted training config.
//!
//! Loads the config through the full pipeline and prints the architecture,
//! part and class vocabularies, skeleton, and preprocessing parameters, or
//! the whole config as JSON.

use crate::settings::OutputFormat;
use pose_config::{ConfigLoader, TrainingConfig};
use std::path::PathBuf;

pub fn execute(file: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let config = ConfigLoader::load(&file).map_err(|e| {
        anyhow::anyhow!("failed to load training config '{}': {e}", file.display())
    })?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => print_report(&config),
    }
    Ok(())
}

fn print_report(config: &TrainingConfig) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            pose-cfg · Training Config               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Summary ────────────────────────────────────────────────
    println!("  Model type:    {}", config.model_type);
    println!("  Target size:   {}", config.target_size);
    println!("  Input scaling: {}", config.input_scaling);
    println!();

    // ── Parts ──────────────────────────────────────────────────
    println!("  Parts ({}):", config.num_parts());
    if config.part_names.is_empty() {
        println!("   (none extracted for this model type)");
    }
    for (i, part) in config.part_names.iter().enumerate() {
        println!("   {i:>3}  {part}");
    }
    println!();

    // ── Classes ────────────────────────────────────────────────
    if !config.class_names.is_empty() {
        println!("  Classes ({}):", config.num_classes());
        for (i, class) in config.class_names.iter().enumerate() {
            println!("   {i:>3}  {class}");
        }
        println!();
    }

    // ── Skeleton ───────────────────────────────────────────────
    let skeleton = &config.skeleton;
    println!("  Skeleton:");
    println!(
        "   Name:     {}",
        if skeleton.name.is_empty() {
            "-"
        } else {
            skeleton.name.as_str()
        }
    );
    println!("   Directed: {}", skeleton.directed_edges);
    println!("   Edges:    {}", skeleton.num_edges());
    for link in &skeleton.edges {
        println!(
            "    {} -> {}",
            part_label(config, link.source),
            part_label(config, link.target),
        );
    }
    println!();
}

/// Resolves a part index to its name, falling back to the raw index.
fn part_label(config: &TrainingConfig, index: usize) -> String {
    config
        .part_names
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("#{index}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pose_config::{Link, ModelType};

    #[test]
    fn test_part_label() {
        let mut c = TrainingConfig::new(ModelType::SingleInstance);
        c.part_names = vec!["head".into(), "tail".into()];
        c.skeleton.edges.push(Link::new(0, 1));
        assert_eq!(part_label(&c, 1), "tail");
        assert_eq!(part_label(&c, 7), "#7");
    }
}
