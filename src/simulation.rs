//! Simulation world, builder, and frame loop.
//!
//! [`World`] is the pure CPU core: particle store, pointer state, force
//! field, and integrator, advanced by [`World::step`] from a sampled
//! [`Controls`] value. It has no handle to a window or GPU, so tests and
//! benchmarks drive it headless.
//!
//! [`Playground`] is the builder users start from; its `run()` opens a
//! fixed-size window and blocks inside the winit event loop. [`App`] wires
//! the two together: input events are only recorded between frames, and
//! every state mutation happens inside the redraw callback.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::arena::Arena;
use crate::error::PlaygroundError;
use crate::field::ForceField;
use crate::input::{Controls, Input};
use crate::integrator::Integrator;
use crate::particle::ParticleStore;
use crate::pointer::PointerState;
use crate::renderer::Renderer;
use crate::time::FrameClock;

/// Particles spawned per click.
pub const BURST_SIZE: usize = 14;

const WINDOW_TITLE: &str =
    "wellbox \u{b7} A attract \u{b7} R repel \u{b7} hold I/D strength \u{b7} Alt temp repel \u{b7} C clear";

/// The complete simulation state, advanced one frame at a time.
#[derive(Debug)]
pub struct World {
    arena: Arena,
    store: ParticleStore,
    pointer: PointerState,
    field: ForceField,
    integrator: Integrator,
}

impl World {
    /// Build a world and seed the initial particle set.
    pub fn new(arena: Arena) -> Self {
        let mut store = ParticleStore::new(arena.max_particles);
        store.spawn(arena.initial_particles, None, &arena);

        Self {
            arena,
            store,
            pointer: PointerState::new(),
            field: ForceField::new(),
            integrator: Integrator::new(),
        }
    }

    /// Advance one frame.
    ///
    /// Order per the frame contract: pointer/ramp update first, then force
    /// and integration for every live particle, then spawn/clear commands.
    /// Burst particles therefore sit at their origin until the next frame's
    /// integration.
    pub fn step(&mut self, controls: &Controls, dt: f32) {
        self.pointer.apply(controls, dt);

        for particle in self.store.particles_mut() {
            let acceleration = self.field.acceleration(particle.position, &self.pointer);
            self.integrator.step(particle, acceleration, &self.arena);
        }

        if controls.clear {
            self.store.clear();
        }
        for &origin in &controls.bursts {
            self.store.spawn(BURST_SIZE, Some(origin), &self.arena);
        }
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[inline]
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }
}

/// Playground builder.
///
/// Use method chaining to configure, then call `.run()` to open the window
/// and block until it closes.
///
/// ```no_run
/// use wellbox::Playground;
///
/// Playground::new()
///     .with_size(720.0, 420.0)
///     .with_max_particles(120)
///     .run()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Playground {
    arena: Arena,
}

impl Playground {
    /// Create a playground with default settings.
    pub fn new() -> Self {
        Self {
            arena: Arena::default(),
        }
    }

    /// Set the arena size in pixels.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.arena.width = width;
        self.arena.height = height;
        self
    }

    /// Set the particle radius in pixels.
    pub fn with_particle_radius(mut self, radius: f32) -> Self {
        self.arena.particle_radius = radius;
        self
    }

    /// Set how many particles are seeded at startup.
    pub fn with_initial_particles(mut self, count: usize) -> Self {
        self.arena.initial_particles = count;
        self
    }

    /// Set the capacity ceiling.
    pub fn with_max_particles(mut self, count: usize) -> Self {
        self.arena.max_particles = count;
        self
    }

    /// Run the playground. Blocks until the window is closed.
    ///
    /// State does not persist across runs: a new call starts from the
    /// seeded world and default strength again.
    pub fn run(self) -> Result<(), PlaygroundError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.arena);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Running,
    Stopped,
}

struct App {
    world: World,
    input: Input,
    clock: FrameClock,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    phase: Phase,
    /// First fatal setup error, surfaced by `Playground::run`.
    error: Option<PlaygroundError>,
}

impl App {
    fn new(arena: Arena) -> Self {
        Self {
            world: World::new(arena),
            input: Input::new(),
            clock: FrameClock::new(),
            window: None,
            renderer: None,
            phase: Phase::Running,
            error: None,
        }
    }

    fn stop(&mut self, event_loop: &ActiveEventLoop) {
        self.phase = Phase::Stopped;
        event_loop.exit();
    }

    /// One simulation frame: ramp, physics, commands, render, reschedule.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.phase != Phase::Running {
            return;
        }

        let dt = self.clock.tick();
        let controls = Controls::sample(&self.input);
        self.world.step(&controls, dt);

        if let Some(renderer) = &mut self.renderer {
            match renderer.render(self.world.store()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => renderer.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU reported out of memory, shutting down");
                    self.stop(event_loop);
                    return;
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        self.input.begin_frame();

        if let Some(window) = &self.window {
            if self.clock.frame() % 30 == 0 {
                window.set_title(&format!("{WINDOW_TITLE} \u{b7} {:.0} fps", self.clock.fps()));
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.phase == Phase::Stopped {
            return;
        }

        let arena = *self.world.arena();
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(arena.width as f64, arena.height as f64))
            .with_resizable(false);

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(e.into());
                self.stop(event_loop);
                return;
            }
        };

        self.input.set_scale_factor(window.scale_factor());

        match pollster::block_on(Renderer::new(window.clone(), &arena)) {
            Ok(renderer) => {
                log::info!(
                    "playground up: {}x{} px, {} seeded, cap {}",
                    arena.width,
                    arena.height,
                    arena.initial_particles,
                    arena.max_particles
                );
                self.renderer = Some(renderer);
                self.window = Some(window);
            }
            Err(e) => {
                self.error = Some(e.into());
                self.stop(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Inert once stopped: late events must not touch a dead world.
        if self.phase == Phase::Stopped {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.stop(event_loop);
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            other => self.input.handle_event(&other),
        }
    }
}
