mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spawn_map::prelude::{ImageSize, RarityClassifier, SpawnConfig};

fn make_inputs(count: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.random::<f64>() * 0.3, rng.random::<f64>() * 20.0))
        .collect()
}

fn rarity_for_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify/rarity_for");
    let classifier = RarityClassifier::default();

    for &n in &[64usize, 1024, 16384] {
        let inputs = make_inputs(n, 0xC0FFEE);
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                for &(weight, bsm) in &inputs {
                    black_box(classifier.rarity_for(weight, bsm));
                }
            });
        });
    }

    group.finish();
}

fn classify_config_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify/config");
    let classifier = RarityClassifier::default();

    for &creatures in &[16usize, 128] {
        let entries = creatures * 8;
        group.throughput(common::elements_throughput(entries));

        group.bench_with_input(
            BenchmarkId::from_parameter(creatures),
            &creatures,
            |b, &creatures| {
                b.iter_batched(
                    || {
                        (0..creatures).fold(
                            SpawnConfig::new("bench.png", ImageSize::new(4096, 4096)),
                            |cfg, i| {
                                cfg.with_creature(
                                    format!("C{i}"),
                                    common::make_creature(8, 2, 0xFACE + i as u64),
                                )
                            },
                        )
                    },
                    |mut cfg| black_box(classifier.classify_config(&mut cfg)),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = rarity_for_benches,
              classify_config_benches
}
criterion_main!(benches);
