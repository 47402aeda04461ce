//! Input handling for the playground.
//!
//! [`Input`] is a thin accumulator over raw winit window events: it records
//! which bound keys are held or were just pressed, where the pointer is in
//! arena coordinates, and where clicks landed. Handlers only record state —
//! no timers, no spawning, no rendering. Once per frame the simulation
//! samples the accumulator into a plain [`Controls`] value, which is the
//! complete set of intents for that frame.
//!
//! Bindings:
//!
//! | Key | Effect |
//! |-----|--------|
//! | `A` | force mode = attract (sticky) |
//! | `R` | force mode = repel (sticky) |
//! | `I` (held) | ramp strength up |
//! | `D` (held) | ramp strength down |
//! | `C` | clear all particles |
//! | `Alt` (held) | momentary repel |
//! | left click | burst-spawn at the click point |

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::pointer::ForceMode;

/// A key the playground actually binds, named by what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Attract,
    Repel,
    RampUp,
    RampDown,
    Clear,
    TempRepel,
}

fn binding_for(key: KeyCode) -> Option<Binding> {
    match key {
        KeyCode::KeyA => Some(Binding::Attract),
        KeyCode::KeyR => Some(Binding::Repel),
        KeyCode::KeyI => Some(Binding::RampUp),
        KeyCode::KeyD => Some(Binding::RampDown),
        KeyCode::KeyC => Some(Binding::Clear),
        KeyCode::AltLeft | KeyCode::AltRight => Some(Binding::TempRepel),
        _ => None,
    }
}

/// Accumulated input state between two frames.
///
/// Tracks both instantaneous events (key just pressed, clicks this frame)
/// and continuous state (key held, pointer position).
#[derive(Debug)]
pub struct Input {
    held: HashSet<Binding>,
    pressed: HashSet<Binding>,

    /// Pointer position in logical (arena) pixels, `None` while the
    /// pointer is outside the window.
    cursor: Option<Vec2>,
    /// Left-click positions recorded since the last frame.
    clicks: Vec<Vec2>,

    /// Window scale factor, for mapping physical event coordinates back to
    /// the logical arena grid.
    scale_factor: f64,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            held: HashSet::new(),
            pressed: HashSet::new(),
            cursor: None,
            clicks: Vec::new(),
            scale_factor: 1.0,
        }
    }
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a bound key is currently held down.
    pub fn held(&self, binding: Binding) -> bool {
        self.held.contains(&binding)
    }

    /// Check if a bound key was pressed this frame (just went down).
    pub fn pressed(&self, binding: Binding) -> bool {
        self.pressed.contains(&binding)
    }

    /// Pointer position in arena pixels, if the pointer is over the arena.
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Left-click positions recorded since the last frame, in arena pixels.
    pub fn clicks(&self) -> &[Vec2] {
        &self.clicks
    }

    /// Clear per-frame state. Called after the frame has sampled its
    /// [`Controls`]; held keys and the pointer position survive.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.clicks.clear();
    }

    pub(crate) fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let Some(binding) = binding_for(code) else {
                    return;
                };
                match event.state {
                    ElementState::Pressed => {
                        // OS key-repeat must not re-fire press intents.
                        if !self.held.contains(&binding) {
                            self.pressed.insert(binding);
                        }
                        self.held.insert(binding);
                    }
                    ElementState::Released => {
                        self.held.remove(&binding);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(self.scale_factor);
                self.cursor = Some(Vec2::new(logical.x as f32, logical.y as f32));
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(cursor) = self.cursor {
                    self.clicks.push(cursor);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
            }

            _ => {}
        }
    }
}

/// One frame's worth of sampled intents.
///
/// A plain value with no handle back to the window, so the simulation core
/// can be driven headless (tests construct these directly).
#[derive(Debug, Clone, Default)]
pub struct Controls {
    /// Pointer position if over the arena.
    pub cursor: Option<Vec2>,
    /// Modifier held: momentary repel.
    pub temp_repel: bool,
    /// Sticky mode change requested this frame.
    pub set_mode: Option<ForceMode>,
    /// Ramp strength upward this frame.
    pub ramp_up: bool,
    /// Ramp strength downward this frame.
    pub ramp_down: bool,
    /// Remove all particles this frame.
    pub clear: bool,
    /// Burst-spawn origins, one per click.
    pub bursts: Vec<Vec2>,
}

impl Controls {
    /// Sample the input accumulator into this frame's intents.
    pub fn sample(input: &Input) -> Self {
        let mut set_mode = None;
        if input.pressed(Binding::Attract) {
            set_mode = Some(ForceMode::Attract);
        }
        if input.pressed(Binding::Repel) {
            set_mode = Some(ForceMode::Repel);
        }

        Self {
            cursor: input.cursor(),
            temp_repel: input.held(Binding::TempRepel),
            set_mode,
            ramp_up: input.held(Binding::RampUp),
            ramp_down: input.held(Binding::RampDown),
            clear: input.pressed(Binding::Clear),
            bursts: input.clicks().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_table() {
        assert_eq!(binding_for(KeyCode::KeyA), Some(Binding::Attract));
        assert_eq!(binding_for(KeyCode::KeyR), Some(Binding::Repel));
        assert_eq!(binding_for(KeyCode::KeyI), Some(Binding::RampUp));
        assert_eq!(binding_for(KeyCode::KeyD), Some(Binding::RampDown));
        assert_eq!(binding_for(KeyCode::KeyC), Some(Binding::Clear));
        assert_eq!(binding_for(KeyCode::AltRight), Some(Binding::TempRepel));
        assert_eq!(binding_for(KeyCode::Space), None);
    }

    #[test]
    fn test_pressed_cleared_by_begin_frame() {
        let mut input = Input::new();

        // Simulate a press via direct state manipulation (normally done
        // via handle_event).
        input.pressed.insert(Binding::Clear);
        input.held.insert(Binding::Clear);

        assert!(input.pressed(Binding::Clear));
        input.begin_frame();
        assert!(!input.pressed(Binding::Clear));
        assert!(input.held(Binding::Clear));
    }

    #[test]
    fn test_clicks_drain_per_frame() {
        let mut input = Input::new();
        input.cursor = Some(Vec2::new(10.0, 20.0));
        input.clicks.push(Vec2::new(10.0, 20.0));

        assert_eq!(input.clicks().len(), 1);
        input.begin_frame();
        assert!(input.clicks().is_empty());
    }

    #[test]
    fn test_sample_maps_mode_and_ramps() {
        let mut input = Input::new();
        input.pressed.insert(Binding::Repel);
        input.held.insert(Binding::RampUp);
        input.held.insert(Binding::TempRepel);
        input.cursor = Some(Vec2::new(5.0, 5.0));

        let ctrl = Controls::sample(&input);
        assert_eq!(ctrl.set_mode, Some(ForceMode::Repel));
        assert!(ctrl.ramp_up);
        assert!(!ctrl.ramp_down);
        assert!(ctrl.temp_repel);
        assert!(!ctrl.clear);
        assert_eq!(ctrl.cursor, Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_sample_idle_input_is_inert() {
        let input = Input::new();
        let ctrl = Controls::sample(&input);
        assert!(ctrl.cursor.is_none());
        assert!(ctrl.set_mode.is_none());
        assert!(!ctrl.ramp_up && !ctrl.ramp_down && !ctrl.clear && !ctrl.temp_repel);
        assert!(ctrl.bursts.is_empty());
    }
}
