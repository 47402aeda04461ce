//! Benchmarks for the CPU frame step.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wellbox::prelude::*;

fn bench_world_step(c: &mut Criterion) {
    let arena = Arena::default();
    let mut world = World::new(arena);

    // Saturate the store so every frame integrates a full arena.
    let mut fill = Controls::default();
    fill.bursts.push(Vec2::new(360.0, 210.0));
    while world.store().len() < arena.max_particles {
        world.step(&fill, 1.0 / 60.0);
    }

    let mut ctrl = Controls::default();
    ctrl.cursor = Some(Vec2::new(360.0, 210.0));
    ctrl.ramp_up = true;

    c.bench_function("world_step_full_arena", |b| {
        b.iter(|| world.step(black_box(&ctrl), 1.0 / 60.0))
    });
}

fn bench_integrate(c: &mut Criterion) {
    let arena = Arena::default();
    let mut store = ParticleStore::with_seed(arena.max_particles, 7);
    store.spawn(arena.max_particles, None, &arena);

    let field = ForceField::new();
    let integrator = Integrator::new();
    let pointer = PointerState {
        position: Vec2::new(100.0, 100.0),
        active: true,
        ..PointerState::default()
    };

    c.bench_function("integrate_full_arena", |b| {
        b.iter(|| {
            for particle in store.particles_mut() {
                let accel = field.acceleration(particle.position, &pointer);
                integrator.step(particle, accel, &arena);
            }
        })
    });
}

fn bench_burst_evict(c: &mut Criterion) {
    let arena = Arena::default();
    let mut store = ParticleStore::with_seed(arena.max_particles, 7);
    store.spawn(arena.max_particles, None, &arena);

    // Every burst on a full store pays the FIFO eviction path.
    c.bench_function("burst_at_capacity", |b| {
        b.iter(|| store.spawn(black_box(BURST_SIZE), Some(Vec2::new(50.0, 50.0)), &arena))
    });
}

criterion_group!(benches, bench_world_step, bench_integrate, bench_burst_evict);
criterion_main!(benches);
