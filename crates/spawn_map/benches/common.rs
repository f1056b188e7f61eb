use std::time::Duration;

use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spawn_map::prelude::{CreatureDefinition, Point, Region, SpawnEntry};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Random creature on a 4096px map. Roughly a third of the boxes are tiny.
pub fn make_creature(entries: usize, regions_per_entry: usize, seed: u64) -> CreatureDefinition {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut creature = CreatureDefinition::new("Bench");

    for _ in 0..entries {
        let weight = rng.random::<f64>() * 0.3;
        let best_shared_min = if rng.random::<f32>() < 0.5 {
            0.0
        } else {
            rng.random::<f64>() * 20.0
        };
        let mut entry = SpawnEntry::new(weight, best_shared_min)
            .with_special_category(rng.random::<f32>() < 0.2)
            .with_force_untameable(rng.random::<f32>() < 0.1);

        for _ in 0..regions_per_entry {
            let x = rng.random::<f32>() * 4000.0;
            let y = rng.random::<f32>() * 4000.0;
            let (w, h) = if rng.random::<f32>() < 0.33 {
                (10.0 + rng.random::<f32>() * 30.0, 10.0 + rng.random::<f32>() * 30.0)
            } else {
                (50.0 + rng.random::<f32>() * 400.0, 50.0 + rng.random::<f32>() * 400.0)
            };
            entry = entry.with_region(Region::new(x, y, w, h));
        }
        if rng.random::<f32>() < 0.5 {
            let x = rng.random::<f32>() * 4096.0;
            let y = rng.random::<f32>() * 4096.0;
            entry = entry.with_point(Point::new(x, y));
        }
        creature = creature.with_entry(entry);
    }

    creature
}
