//! Verlet point masses.

use crate::float::Float;
use crate::vec::Vec2;

/// Radius used for hit-testing and drawing when none is given.
pub const DEFAULT_RADIUS: f32 = 5.0;

/// A Verlet particle. Velocity is implied by `pos - prev_pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub pinned: bool,
    pub radius: F,
}

impl<F: Float> Particle<F> {
    /// A particle at rest at `pos`.
    pub fn new(pos: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            pinned: false,
            radius: F::from_f32(DEFAULT_RADIUS),
        }
    }

    pub fn pinned(pos: Vec2<F>) -> Self {
        Particle { pinned: true, ..Particle::new(pos) }
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    /// Displacement over the last step, scaled by `damping`.
    pub fn implied_velocity(&self, damping: F) -> Vec2<F> {
        (self.pos - self.prev_pos).scale(damping)
    }

    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Advance one step: carry the damped implied velocity forward, then fall by `gravity`.
    pub fn integrate(&mut self, gravity: F, damping: F) {
        if self.pinned {
            return;
        }
        let velocity = self.implied_velocity(damping);
        self.prev_pos = self.pos;
        self.pos = self.pos + velocity;
        self.pos.y = self.pos.y + gravity;
    }

    /// Pin in place. History is reset so a later unpin starts at rest.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Flip the pinned state and return the new one.
    pub fn toggle_pin(&mut self) -> bool {
        if self.pinned {
            self.unpin();
        } else {
            self.pin();
        }
        self.pinned
    }

    /// `true` when `point` lies strictly inside `tolerance`.
    pub fn within(&self, point: Vec2<F>, tolerance: F) -> bool {
        self.pos.distance_sq(point) < tolerance * tolerance
    }

    /// Like [`within`](Self::within) but the boundary counts as a hit.
    pub fn within_inclusive(&self, point: Vec2<F>, tolerance: F) -> bool {
        self.pos.distance_sq(point) <= tolerance * tolerance
    }
}
