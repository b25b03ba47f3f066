//! # Showcase Benchmark
//!
//! Whole-scene rebuild cost at different worker counts.
//!
//! Run with: `cargo bench --package curio`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use curio::assets::AssetType;
use curio::shared::Vec3;
use curio::{build_showcase, AssetRegistry, Placement, ShowcaseConfig};

fn grid(count: usize) -> ShowcaseConfig {
    let assets = (0..count)
        .map(|i| {
            let asset = AssetType::ALL[i % AssetType::COUNT].name();
            #[allow(clippy::cast_precision_loss)]
            let x = i as f32 * 4.0;
            Placement::new(asset, "#4f46e5", Vec3::new(x, 0.0, 0.0))
        })
        .collect();
    ShowcaseConfig::new("bench", assets)
}

/// Benchmark: 100 placements with 1, 2, 4 and 8 workers.
fn bench_showcase(c: &mut Criterion) {
    let registry = AssetRegistry::global();
    let mut group = c.benchmark_group("showcase_100");
    group.throughput(Throughput::Elements(100));

    for workers in [1_usize, 2, 4, 8] {
        let mut config = grid(100);
        config.showcase.workers = Some(workers);
        group.bench_with_input(BenchmarkId::from_parameter(workers), &config, |b, config| {
            b.iter(|| black_box(build_showcase(config, registry).map(|s| s.stats.meshes)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_showcase);
criterion_main!(benches);
