//! Pointer-driven editing session on top of a [`Scene`].
//!
//! The shell decodes its own window events and forwards them here as points
//! and [`Command`]s; it reads positions, segments and [`Status`] back out to
//! draw. No window or event types appear in this module.
//!
//! In [`Mode::Edit`] a press on empty space places a particle, and a drag from
//! one particle to another links them. In [`Mode::Simulate`] any drag cuts
//! every constraint it crosses, even one that starts on a particle, and
//! [`Sandbox::tick`] advances the physics.

use crate::config::SimConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::grid::{build_grid, GridConfig};
use crate::observer::StepObserver;
use crate::query::HitMode;
use crate::scene::{ConstraintHandle, ParticleHandle, Scene};
use crate::solver::step;
use crate::vec::Vec2;
use alloc::vec::Vec;

pub const MIN_STIFFNESS: usize = 1;
pub const MAX_STIFFNESS: usize = 25;
/// Distance the pointer travels before a polyline stroke drops another particle.
pub const DEFAULT_LINE_SPACING: f32 = 20.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Edit,
    Simulate,
}

/// Discrete toggles a shell maps its key bindings onto.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePhysics,
    ToggleBounce,
    IncreaseStiffness,
    DecreaseStiffness,
    TogglePoints,
    ToggleOptions,
    /// Drop everything and return to editing.
    Clear,
}

/// Result of [`Sandbox::press`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Press {
    Placed(ParticleHandle),
    LinkStarted(ParticleHandle),
    CutStarted,
}

/// Result of [`Sandbox::release`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Release {
    Linked(ConstraintHandle),
    Cut(usize),
    Nothing,
}

/// Snapshot of the session toggles for a HUD.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub mode: Mode,
    pub bounce_enabled: bool,
    pub stiffness: usize,
    pub show_points: bool,
    pub show_options: bool,
    pub particles: usize,
    pub constraints: usize,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Gesture<F: Float> {
    Link(ParticleHandle),
    Cut(Vec2<F>),
}

pub struct Sandbox<F: Float> {
    scene: Scene<F>,
    config: SimConfig<F>,
    mode: Mode,
    gesture: Option<Gesture<F>>,
    polyline: Option<(Vec2<F>, ParticleHandle)>,
    line_spacing: F,
    show_points: bool,
    show_options: bool,
}

impl<F: Float> Sandbox<F> {
    /// Stiffness outside `MIN_STIFFNESS..=MAX_STIFFNESS` is clamped into range.
    pub fn new(mut config: SimConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        config.stiffness = config.stiffness.clamp(MIN_STIFFNESS, MAX_STIFFNESS);
        Ok(Sandbox {
            scene: Scene::new(),
            config,
            mode: Mode::Edit,
            gesture: None,
            polyline: None,
            line_spacing: F::from_f32(DEFAULT_LINE_SPACING),
            show_points: true,
            show_options: false,
        })
    }

    pub fn with_line_spacing(mut self, spacing: F) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn scene(&self) -> &Scene<F> { &self.scene }
    pub fn scene_mut(&mut self) -> &mut Scene<F> { &mut self.scene }
    pub fn config(&self) -> &SimConfig<F> { &self.config }
    pub fn mode(&self) -> Mode { self.mode }

    pub fn status(&self) -> Status {
        Status {
            mode: self.mode,
            bounce_enabled: self.config.bounce_enabled,
            stiffness: self.config.stiffness,
            show_points: self.show_points,
            show_options: self.show_options,
            particles: self.scene.particle_count(),
            constraints: self.scene.constraint_count(),
        }
    }

    /// Primary button went down at `point`.
    pub fn press(&mut self, point: Vec2<F>) -> Press {
        if self.mode == Mode::Simulate {
            self.gesture = Some(Gesture::Cut(point));
            return Press::CutStarted;
        }
        match self.scene.hit_test(point, HitMode::Inclusive) {
            Some(particle) => {
                self.gesture = Some(Gesture::Link(particle));
                Press::LinkStarted(particle)
            }
            None => Press::Placed(self.scene.add_particle(point)),
        }
    }

    /// Primary button came up at `point`, finishing any gesture.
    pub fn release(&mut self, point: Vec2<F>) -> Release {
        match self.gesture.take() {
            Some(Gesture::Link(start)) => {
                let target = self
                    .scene
                    .particles()
                    .find(|(h, p)| *h != start && p.within(point, p.radius))
                    .map(|(h, _)| h);
                match target.map(|end| self.scene.add_constraint(start, end)) {
                    Some(Ok(c)) => Release::Linked(c),
                    _ => Release::Nothing,
                }
            }
            Some(Gesture::Cut(start)) => Release::Cut(self.scene.cut(start, point)),
            None => Release::Nothing,
        }
    }

    /// Segment from the gesture start to `pointer`, if a gesture is active.
    pub fn drag_preview(&self, pointer: Vec2<F>) -> Option<(Vec2<F>, Vec2<F>)> {
        match self.gesture? {
            Gesture::Link(start) => self.scene.particle(start).map(|p| (p.pos, pointer)),
            Gesture::Cut(start) => Some((start, pointer)),
        }
    }

    /// Flip the pin on the first particle strictly under `point`.
    ///
    /// Pinning discards the particle's motion, so unpinning it later starts it at rest.
    pub fn toggle_pin_at(&mut self, point: Vec2<F>) -> Option<bool> {
        let handle = self.scene.hit_test(point, HitMode::Strict)?;
        self.scene.toggle_pin(handle)
    }

    /// Remove every particle strictly under `point`, with their constraints.
    pub fn delete_at(&mut self, point: Vec2<F>) -> usize {
        let doomed = self.scene.hits(point, HitMode::Strict);
        doomed
            .into_iter()
            .filter(|h| self.scene.remove_particle(*h).is_some())
            .count()
    }

    /// Continue a freehand rope at `point`. Only active while editing.
    ///
    /// The first call places a particle; later calls place and link a new one
    /// whenever the pointer is more than the line spacing from the last.
    pub fn extend_polyline(&mut self, point: Vec2<F>) -> Option<ParticleHandle> {
        if self.mode != Mode::Edit {
            return None;
        }
        match self.polyline {
            Some((last_pos, last)) => {
                if last_pos.distance(point) <= self.line_spacing {
                    return None;
                }
                let next = self.scene.add_particle(point);
                // the previous particle may have been deleted mid-stroke
                if let Err(err) = self.scene.add_constraint(last, next) {
                    tracing::debug!(%err, "polyline restarted");
                }
                self.polyline = Some((point, next));
                Some(next)
            }
            None => {
                let first = self.scene.add_particle(point);
                self.polyline = Some((point, first));
                Some(first)
            }
        }
    }

    pub fn end_polyline(&mut self) {
        self.polyline = None;
    }

    pub fn spawn_grid(&mut self, grid: &GridConfig<F>) -> Result<Vec<ParticleHandle>, PhysicsError> {
        build_grid(&mut self.scene, grid)
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePhysics => {
                self.gesture = None;
                self.polyline = None;
                self.mode = match self.mode {
                    Mode::Edit => Mode::Simulate,
                    Mode::Simulate => {
                        self.show_points = true;
                        Mode::Edit
                    }
                };
            }
            Command::ToggleBounce => self.config.bounce_enabled = !self.config.bounce_enabled,
            Command::IncreaseStiffness => {
                self.config.stiffness = self.config.stiffness.saturating_add(1).min(MAX_STIFFNESS);
            }
            Command::DecreaseStiffness => {
                self.config.stiffness = self.config.stiffness.saturating_sub(1).max(MIN_STIFFNESS);
            }
            Command::TogglePoints => self.show_points = !self.show_points,
            Command::ToggleOptions => self.show_options = !self.show_options,
            Command::Clear => {
                self.scene.clear();
                self.gesture = None;
                self.polyline = None;
                self.mode = Mode::Edit;
                self.show_points = true;
            }
        }
        tracing::debug!(?command, mode = ?self.mode, stiffness = self.config.stiffness, "command applied");
    }

    /// Advance one frame if simulating. Returns whether physics ran.
    pub fn tick<O: StepObserver>(&mut self, observer: &mut O) -> bool {
        if self.mode != Mode::Simulate {
            return false;
        }
        step(&mut self.scene, &self.config, observer);
        true
    }
}
