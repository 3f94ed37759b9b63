//! Simulation parameters.

use crate::bounds::Bounds;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

pub const DEFAULT_GRAVITY: f32 = 0.5;
pub const DEFAULT_DAMPING: f32 = 0.999;
pub const DEFAULT_BOUNCE: f32 = 0.9;
pub const DEFAULT_STIFFNESS: usize = 10;
pub const DEFAULT_FALL_THRESHOLD: f32 = 2000.0;
pub const DEFAULT_WIDTH: f32 = 1280.0;
pub const DEFAULT_HEIGHT: f32 = 720.0;

/// Everything [`step`](crate::solver::step) needs besides the scene.
///
/// Units are per step: there is no `dt`, gravity is a positional offset
/// applied once per frame.
///
/// # Builder Pattern
/// ```
/// use verlet_sandbox::config::SimConfig;
/// use verlet_sandbox::bounds::Bounds;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_stiffness(4)
///     .with_gravity(0.25)
///     .with_bounds(Bounds::from_size(640.0, 480.0))
///     .with_bounce_enabled(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig<F: Float> {
    /// Downward offset added to every free particle each step. Default: 0.5.
    pub gravity: F,
    /// Fraction of implied velocity kept per step. Default: 0.999.
    pub damping: F,
    /// Fraction of speed kept when reflecting off a wall. Default: 0.9.
    pub bounce: F,
    /// Relaxation passes per step, at least 1. Default: 10.
    pub stiffness: usize,
    /// Whether walls are enforced. Default: true.
    pub bounce_enabled: bool,
    /// Default: `(0, 0)` to `(1280, 720)`.
    pub bounds: Bounds<F>,
    /// Constraints with both ends below this y are discarded. Default: 2000.
    pub fall_threshold: F,
}

impl<F: Float> SimConfig<F> {
    pub fn new() -> Self {
        SimConfig {
            gravity: F::from_f32(DEFAULT_GRAVITY),
            damping: F::from_f32(DEFAULT_DAMPING),
            bounce: F::from_f32(DEFAULT_BOUNCE),
            stiffness: DEFAULT_STIFFNESS,
            bounce_enabled: true,
            bounds: Bounds::new(
                Vec2::zero(),
                Vec2::new(F::from_f32(DEFAULT_WIDTH), F::from_f32(DEFAULT_HEIGHT)),
            ),
            fall_threshold: F::from_f32(DEFAULT_FALL_THRESHOLD),
        }
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    /// Set the passes per step; zero is raised to one.
    pub fn with_stiffness(mut self, stiffness: usize) -> Self {
        self.stiffness = stiffness.max(1);
        self
    }

    pub fn with_bounce_enabled(mut self, enabled: bool) -> Self {
        self.bounce_enabled = enabled;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds<F>) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_fall_threshold(mut self, threshold: F) -> Self {
        self.fall_threshold = threshold;
        self
    }

    /// Check the physical constants are in range.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.damping > F::zero() && self.damping <= F::one()) {
            return Err(PhysicsError::InvalidDamping);
        }
        if !(self.bounce >= F::zero() && self.bounce <= F::one()) {
            return Err(PhysicsError::InvalidBounce);
        }
        let Bounds { min, max } = self.bounds;
        if !(min.x < max.x && min.y < max.y) {
            return Err(PhysicsError::InvalidBounds);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
