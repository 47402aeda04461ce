//! Pointer-anchored force well state.
//!
//! [`PointerState`] is the simulation-side view of the pointer: last known
//! position, whether the pointer is over the arena, the sticky force mode,
//! the momentary repel override, and the ramped strength scalar. It is
//! owned by the world and mutated only once per frame from the sampled
//! [`Controls`](crate::input::Controls).

use glam::Vec2;

use crate::input::Controls;

/// Strength the well starts at.
pub const STRENGTH_DEFAULT: f32 = 1400.0;
/// Ramp-down floor.
pub const STRENGTH_MIN: f32 = 400.0;
/// Ramp-up ceiling.
pub const STRENGTH_MAX: f32 = 4000.0;
/// Strength change per second while a ramp key is held.
pub const RAMP_RATE: f32 = 2400.0;

/// Whether the well pulls particles in or pushes them out.
///
/// Sticky: a mode key press changes it, and it persists until the next
/// press. The Alt override in [`PointerState::temp_repel`] flips the force
/// sign without touching the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceMode {
    #[default]
    Attract,
    Repel,
}

/// Force-well parameters sampled by the field every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Last known pointer position in arena pixels. Retained while the
    /// pointer is away so re-entry starts from a sane spot.
    pub position: Vec2,
    /// True while the pointer is over the arena. The field is inert when
    /// this is false.
    pub active: bool,
    /// Momentary repel while the modifier key is held.
    pub temp_repel: bool,
    /// Sticky attract/repel mode.
    pub mode: ForceMode,
    /// Well strength, clamped to `[STRENGTH_MIN, STRENGTH_MAX]`.
    pub strength: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            active: false,
            temp_repel: false,
            mode: ForceMode::Attract,
            strength: STRENGTH_DEFAULT,
        }
    }
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one frame of sampled controls into the pointer state.
    ///
    /// `dt` is the clamped frame delta in seconds; the ramp is
    /// time-proportional so frame-rate variation does not change how fast
    /// strength climbs. Releasing both ramp keys freezes strength where it
    /// is.
    pub fn apply(&mut self, controls: &Controls, dt: f32) {
        match controls.cursor {
            Some(cursor) => {
                self.position = cursor;
                self.active = true;
            }
            None => self.active = false,
        }
        self.temp_repel = controls.temp_repel;

        if let Some(mode) = controls.set_mode {
            self.mode = mode;
        }

        if controls.ramp_up {
            self.strength = (self.strength + RAMP_RATE * dt).min(STRENGTH_MAX);
        }
        if controls.ramp_down {
            self.strength = (self.strength - RAMP_RATE * dt).max(STRENGTH_MIN);
        }
    }

    /// Effective force sign: `-1.0` when repelling (sticky mode or
    /// momentary override), `+1.0` when attracting.
    #[inline]
    pub fn sign(&self) -> f32 {
        if self.temp_repel || self.mode == ForceMode::Repel {
            -1.0
        } else {
            1.0
        }
    }
}
