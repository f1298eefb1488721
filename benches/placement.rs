//! Benchmarks for brick placement.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;

use bricks::placement::find_slot;
use bricks::{BrickSize, Command, Engine, Rgb, WorldConfig};

/// Builds a world with `count` random bricks already placed.
fn crowded_engine(count: usize) -> Engine {
    let mut engine = Engine::seeded(WorldConfig::default(), 42);
    for _ in 0..count {
        let _ = engine.apply(Command::AddRandomBrick);
    }
    engine
}

/// Benchmark a single collision query against a crowded world.
fn bench_any_collision(c: &mut Criterion) {
    let engine = crowded_engine(150);
    let size = BrickSize::new(2.0, 1.0, 2.0);

    c.bench_function("any_collision", |b| {
        b.iter(|| {
            engine
                .world()
                .any_collision(black_box(Vec3::new(3.0, 0.5, -2.0)), size, None)
        })
    });
}

/// Benchmark the directed slot search when the origin is blocked.
fn bench_find_slot(c: &mut Criterion) {
    let mut engine = crowded_engine(0);
    for _ in 0..30 {
        let _ = engine.apply(Command::AddBrick {
            color: Rgb::default(),
            size: BrickSize::new(1.0, 1.0, 1.0),
        });
    }
    let config = *engine.config();

    c.bench_function("find_slot", |b| {
        b.iter(|| find_slot(engine.world(), black_box(BrickSize::new(2.0, 1.0, 2.0)), &config))
    });
}

/// Benchmark filling an empty world with random bricks.
fn bench_random_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_fill");
    group.sample_size(20);
    group.bench_function("fill_100", |b| b.iter(|| crowded_engine(black_box(100))));
    group.finish();
}

criterion_group!(benches, bench_any_collision, bench_find_slot, bench_random_fill);
criterion_main!(benches);
