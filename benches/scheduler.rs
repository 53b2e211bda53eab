use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use space_garbage::assets::load_sprites;
use space_garbage::core::{launch, GameConfig, NoInput, ObstacleRegistry, Scheduler, World};
use space_garbage::term::{encode_diff_into, FrameBuffer};

fn launched(config: GameConfig) -> (Scheduler, World, FrameBuffer) {
    let sprites = load_sprites(None).unwrap();
    let mut world = World::new(config, 12345);
    let mut scheduler = Scheduler::new(Duration::ZERO);
    launch(&mut scheduler, &mut world, &sprites, 40, 120);
    (scheduler, world, FrameBuffer::new(120, 40))
}

fn bench_tick(c: &mut Criterion) {
    let (mut scheduler, mut world, mut fb) = launched(GameConfig {
        level_ticks: 5,
        ..GameConfig::default()
    });

    c.bench_function("scheduler_step_full_game", |b| {
        b.iter(|| {
            scheduler.step(&mut fb, &mut NoInput, &mut world).unwrap();
        })
    });
}

fn bench_contains_point(c: &mut Criterion) {
    let registry = ObstacleRegistry::new();
    let _guards: Vec<_> = (0..64)
        .map(|i| registry.insert(f64::from(i % 8) * 5.0, f64::from(i / 8) * 10.0, 4, 8))
        .collect();

    c.bench_function("contains_point_64_obstacles", |b| {
        b.iter(|| registry.contains_point(black_box(38.5), black_box(75.0)))
    });
}

fn bench_diff_encode(c: &mut Criterion) {
    let (mut scheduler, mut world, mut fb) = launched(GameConfig::default());
    for _ in 0..40 {
        scheduler.step(&mut fb, &mut NoInput, &mut world).unwrap();
    }
    let prev = fb.clone();
    scheduler.step(&mut fb, &mut NoInput, &mut world).unwrap();
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_diff_one_tick", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&prev), black_box(&fb), &mut out).unwrap();
        })
    });
}

criterion_group!(benches, bench_tick, bench_contains_point, bench_diff_encode);
criterion_main!(benches);
