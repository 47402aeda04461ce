//! # wellbox — interactive 2D force-well particle playground
//!
//! A fixed-size arena of glowing particles pushed around by a
//! pointer-anchored force well. Move the mouse to steer the well, click to
//! burst-spawn particles, and drive it from the keyboard:
//!
//! | Input | Effect |
//! |-------|--------|
//! | `A` / `R` | sticky attract / repel mode |
//! | hold `I` / `D` | ramp well strength up / down |
//! | hold `Alt` | momentary repel |
//! | `C` | clear all particles |
//! | left click | burst of new particles at the click |
//!
//! ## Quick Start
//!
//! ```no_run
//! use wellbox::Playground;
//!
//! fn main() {
//!     Playground::new()
//!         .with_size(720.0, 420.0)
//!         .with_initial_particles(24)
//!         .with_max_particles(120)
//!         .run()
//!         .unwrap();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! - **Force well** ([`ForceField`]): inverse-square acceleration toward
//!   (or away from) the pointer, softened near zero distance. The
//!   short-range slingshot is the point, not a bug.
//! - **Integration** ([`Integrator`]): per frame, per particle — apply
//!   force, damp, clamp speed, move, reflect off the walls.
//! - **Store** ([`ParticleStore`]): bounded particle set; click bursts
//!   past the capacity ceiling evict oldest-first.
//! - **Headless core** ([`World`]): the whole simulation advances from
//!   plain [`Controls`] values, so it runs (and tests) without a window.
//!   [`Playground`] adds the winit/wgpu shell.

pub mod arena;
pub mod error;
pub mod field;
pub mod input;
pub mod integrator;
pub mod particle;
pub mod pointer;
mod renderer;
mod shader;
pub mod simulation;
pub mod time;

pub use arena::Arena;
pub use error::{GpuError, PlaygroundError};
pub use field::ForceField;
pub use glam::{Vec2, Vec3};
pub use input::{Binding, Controls, Input};
pub use integrator::Integrator;
pub use particle::{Particle, ParticleStore};
pub use pointer::{ForceMode, PointerState};
pub use simulation::{Playground, World, BURST_SIZE};
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```
/// use wellbox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arena::Arena;
    pub use crate::field::ForceField;
    pub use crate::input::{Binding, Controls, Input};
    pub use crate::integrator::Integrator;
    pub use crate::particle::{Particle, ParticleStore};
    pub use crate::pointer::{ForceMode, PointerState};
    pub use crate::simulation::{Playground, World, BURST_SIZE};
    pub use crate::time::FrameClock;
    pub use crate::{Vec2, Vec3};
}
