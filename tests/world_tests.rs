//! Integration tests driving the headless simulation core.
//!
//! These exercise whole frames through [`World::step`] with synthetic
//! [`Controls`], the same way the windowed loop does.

use wellbox::prelude::*;

fn idle() -> Controls {
    Controls::default()
}

#[test]
fn test_invariants_hold_under_driven_well() {
    let arena = Arena::default();
    let mut world = World::new(arena);

    // Park an attracting well in a corner, then swap to repel mid-run, and
    // keep checking both frame invariants the whole time.
    let mut ctrl = idle();
    ctrl.cursor = Some(Vec2::new(10.0, 10.0));
    ctrl.ramp_up = true;

    for frame in 0..600 {
        if frame == 300 {
            ctrl.set_mode = Some(ForceMode::Repel);
        } else {
            ctrl.set_mode = None;
        }
        world.step(&ctrl, 1.0 / 60.0);

        for p in world.store().particles() {
            assert!(
                arena.contains(p.position),
                "frame {frame}: particle escaped to {:?}",
                p.position
            );
            assert!(p.velocity.x.abs() <= wellbox::integrator::MAX_SPEED + 1e-5);
            assert!(p.velocity.y.abs() <= wellbox::integrator::MAX_SPEED + 1e-5);
        }
    }
}

#[test]
fn test_click_burst_end_to_end() {
    let mut world = World::new(Arena::default());
    assert_eq!(world.store().len(), 24);

    let mut ctrl = idle();
    ctrl.bursts.push(Vec2::new(100.0, 100.0));
    world.step(&ctrl, 1.0 / 60.0);

    // 24 + 14, and every newcomer still sits exactly at the click point:
    // bursts spawn after integration, so their first move is next frame.
    assert_eq!(world.store().len(), 38);
    let newcomers = &world.store().particles()[24..];
    assert_eq!(newcomers.len(), BURST_SIZE);
    assert!(newcomers
        .iter()
        .all(|p| p.position == Vec2::new(100.0, 100.0)));
}

#[test]
fn test_spawn_then_cap_keeps_newest() {
    let arena = Arena::default();
    let mut world = World::new(arena);

    // Click until the store saturates at the ceiling.
    let mut ctrl = idle();
    ctrl.bursts.push(Vec2::new(200.0, 200.0));
    while world.store().len() < arena.max_particles {
        world.step(&ctrl, 1.0 / 60.0);
    }
    assert_eq!(world.store().len(), arena.max_particles);

    let oldest_before: Vec<u64> = world.store().particles()[..BURST_SIZE]
        .iter()
        .map(|p| p.id)
        .collect();

    // One more click: size stays at the ceiling, the newest burst is
    // present, and the previous oldest burst-size block is gone.
    world.step(&ctrl, 1.0 / 60.0);
    assert_eq!(world.store().len(), arena.max_particles);

    let ids: Vec<u64> = world.store().particles().iter().map(|p| p.id).collect();
    for evicted in &oldest_before {
        assert!(!ids.contains(evicted));
    }
    let newest = &world.store().particles()[arena.max_particles - BURST_SIZE..];
    assert!(newest
        .iter()
        .all(|p| p.position == Vec2::new(200.0, 200.0)));
}

#[test]
fn test_clear_empties_regardless_of_state() {
    let mut world = World::new(Arena::default());

    let mut ctrl = idle();
    ctrl.bursts.push(Vec2::new(300.0, 200.0));
    for _ in 0..5 {
        world.step(&ctrl, 1.0 / 60.0);
    }
    assert!(world.store().len() > 0);

    let mut clear = idle();
    clear.clear = true;
    world.step(&clear, 1.0 / 60.0);
    assert_eq!(world.store().len(), 0);

    // Clearing again is a no-op, and the world keeps running.
    world.step(&clear, 1.0 / 60.0);
    assert_eq!(world.store().len(), 0);
    world.step(&idle(), 1.0 / 60.0);
}

#[test]
fn test_strength_ramp_through_frames() {
    use wellbox::pointer::{RAMP_RATE, STRENGTH_DEFAULT, STRENGTH_MAX};

    let mut world = World::new(Arena::default());
    let mut ctrl = idle();
    ctrl.ramp_up = true;

    // One simulated second at 60 fps.
    for _ in 0..60 {
        world.step(&ctrl, 1.0 / 60.0);
    }
    let expected = (STRENGTH_DEFAULT + RAMP_RATE).min(STRENGTH_MAX);
    assert!((world.pointer().strength - expected).abs() < 1.0);

    // Release: frozen on the next frame and thereafter.
    ctrl.ramp_up = false;
    let frozen = world.pointer().strength;
    for _ in 0..10 {
        world.step(&ctrl, 1.0 / 60.0);
    }
    assert_eq!(world.pointer().strength, frozen);
}

#[test]
fn test_force_direction_matches_modes() {
    let field = ForceField::new();
    let mut pointer = PointerState {
        position: Vec2::new(50.0, 50.0),
        active: true,
        strength: 1000.0,
        ..PointerState::default()
    };

    let pull = field.acceleration(Vec2::new(40.0, 50.0), &pointer);
    assert!(pull.x > 0.0, "attract must pull toward the pointer");

    pointer.mode = ForceMode::Repel;
    let push = field.acceleration(Vec2::new(40.0, 50.0), &pointer);
    assert!(push.x < 0.0, "repel must push away");
    assert!((pull.x + push.x).abs() < 1e-6, "magnitudes must match");
}

#[test]
fn test_attract_converges_on_still_pointer() {
    let arena = Arena::default();
    let mut world = World::new(arena);
    let center = Vec2::new(arena.width / 2.0, arena.height / 2.0);

    let mut ctrl = idle();
    ctrl.cursor = Some(center);

    for _ in 0..2_000 {
        world.step(&ctrl, 1.0 / 60.0);
    }

    // With damping and an attracting well, the average distance to the
    // pointer must come way down from the uniform-seed average.
    let mean: f32 = world
        .store()
        .particles()
        .iter()
        .map(|p| (p.position - center).length())
        .sum::<f32>()
        / world.store().len() as f32;
    assert!(mean < 120.0, "mean distance {mean} did not shrink");
}
