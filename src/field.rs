//! The pointer-anchored force well.
//!
//! A single point source of acceleration with inverse-square falloff:
//! `|a| = strength / (dist² + ε)`. The ε softening keeps the magnitude
//! finite when a particle sits on the pointer; at short range the
//! acceleration is still very large, which is what produces the visible
//! slingshot around the well.

use glam::Vec2;

use crate::pointer::PointerState;

/// Softening added to the squared distance, in px². Matches a well radius
/// of ~14 px below which the falloff flattens.
pub const SOFTENING: f32 = 200.0;

/// Inverse-square force well evaluator.
///
/// Stateless apart from the softening constant: identical inputs always
/// produce identical output.
#[derive(Debug, Clone, Copy)]
pub struct ForceField {
    /// ε added to dist² before the division.
    pub softening: f32,
}

impl Default for ForceField {
    fn default() -> Self {
        Self {
            softening: SOFTENING,
        }
    }
}

impl ForceField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acceleration on a particle at `position`, in px/frame².
    ///
    /// Zero while the pointer is away from the arena. Otherwise points
    /// along the particle→pointer axis, flipped when repelling (sticky
    /// mode or the momentary override).
    pub fn acceleration(&self, position: Vec2, pointer: &PointerState) -> Vec2 {
        if !pointer.active {
            return Vec2::ZERO;
        }

        let to_pointer = pointer.position - position;
        let dist_sq = to_pointer.length_squared() + self.softening;
        let dir = to_pointer / dist_sq.sqrt();

        dir * (pointer.strength / dist_sq) * pointer.sign()
    }
}
