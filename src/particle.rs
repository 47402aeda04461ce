//! Particles and the bounded particle store.
//!
//! The store owns every live particle and is the only place particles are
//! created or destroyed. Physics never kills a particle; the only exits are
//! FIFO eviction past the capacity ceiling and an explicit [`ParticleStore::clear`].

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::arena::Arena;

/// Initial speed range for freshly spawned particles, px/frame.
const SPAWN_SPEED_MIN: f32 = 0.5;
const SPAWN_SPEED_MAX: f32 = 1.8;

/// Saturation/value used for the random-hue spawn colors.
const SPAWN_SATURATION: f32 = 0.65;
const SPAWN_VALUE: f32 = 0.9;

/// One circular particle.
///
/// Position and velocity are in arena pixels; the color is fixed at
/// creation and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Monotonic identity, unique within one store. Survives eviction of
    /// earlier particles.
    pub id: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Linear RGB, each channel 0.0-1.0.
    pub color: Vec3,
}

/// Live particle set with a capacity ceiling.
///
/// Insertion order is creation order, so evicting from the front is
/// oldest-first.
#[derive(Debug)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    next_id: u64,
    max_particles: usize,
    rng: SmallRng,
}

impl ParticleStore {
    /// Create an empty store that retains at most `max_particles`.
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            next_id: 0,
            max_particles,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Same, but with a fixed RNG seed. Spawn kinematics stay reproducible
    /// for a given seed; handy in benchmarks.
    pub fn with_seed(max_particles: usize, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            next_id: 0,
            max_particles,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Spawn `count` particles with random heading, speed, and hue.
    ///
    /// With an `origin` every newcomer starts there (clamped into bounds);
    /// without one, each gets an independent random in-bounds position.
    /// If the insertion pushes the store past its ceiling, the oldest
    /// particles are discarded until the ceiling holds. Spawning 0 is a
    /// no-op.
    pub fn spawn(&mut self, count: usize, origin: Option<Vec2>, arena: &Arena) {
        let origin = origin.map(|p| arena.clamp_point(p));
        for _ in 0..count {
            let position = origin.unwrap_or_else(|| self.random_position(arena));
            let heading = self.rng.gen_range(0.0..TAU);
            let speed = self.rng.gen_range(SPAWN_SPEED_MIN..SPAWN_SPEED_MAX);
            let hue = self.rng.gen::<f32>();

            self.particles.push(Particle {
                id: self.next_id,
                position,
                velocity: Vec2::new(heading.cos(), heading.sin()) * speed,
                color: hsv_to_rgb(hue, SPAWN_SATURATION, SPAWN_VALUE),
            });
            self.next_id += 1;
        }

        if self.particles.len() > self.max_particles {
            let overflow = self.particles.len() - self.max_particles;
            self.particles.drain(..overflow);
        }
    }

    /// Remove every particle unconditionally.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Current particle count.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The capacity ceiling this store enforces.
    #[inline]
    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    /// Read-only view of the live particles, oldest first.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view for the integrator.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    fn random_position(&mut self, arena: &Arena) -> Vec2 {
        let max = arena.max_bound();
        Vec2::new(
            self.rng.gen_range(arena.min_bound()..max.x),
            self.rng.gen_range(arena.min_bound()..max.y),
        )
    }
}

/// Convert HSV to RGB.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}
