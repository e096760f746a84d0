// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for training-config loading.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pose_config::{classify, ConfigLoader, Document};

fn sample_config(num_parts: usize) -> String {
    let parts = (0..num_parts)
        .map(|i| format!("\"part{i}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"{{
  "data": {{
    "labels": {{ "skeletons": [{{ "directed": true, "graph": {{ "name": "bench" }} }}] }},
    "preprocessing": {{ "target_width": 1024, "target_height": 1024, "input_scaling": 0.5 }}
  }},
  "model": {{
    "heads": {{
      "single_instance": {{ "part_names": [{parts}] }},
      "centroid": null,
      "centered_instance": null,
      "multi_instance": null
    }}
  }}
}}"#
    )
}

fn bench_load(c: &mut Criterion) {
    let text = sample_config(32);
    c.bench_function("load_single_instance_32_parts", |b| {
        b.iter(|| ConfigLoader::from_yaml(black_box(&text)).unwrap())
    });
}

fn bench_classify(c: &mut Criterion) {
    let document = Document::from_yaml(&sample_config(256)).unwrap();
    c.bench_function("classify_256_parts", |b| {
        b.iter(|| classify(black_box(&document)).unwrap())
    });
}

criterion_group!(benches, bench_load, bench_classify);
criterion_main!(benches);
