//! Distance links between two particles.

use crate::arena::Arena;
use crate::float::Float;
use crate::particle::Particle;
use crate::scene::ParticleHandle;

/// What a single relaxation did to one constraint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// Endpoints were nudged (or both were pinned and nothing needed moving).
    Applied,
    /// Endpoints coincide, so there is no direction to push along.
    Degenerate,
    /// An endpoint no longer exists.
    Stale,
}

/// Keeps two particles `rest_length` apart.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    a: ParticleHandle,
    b: ParticleHandle,
    rest_length: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: ParticleHandle, b: ParticleHandle, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length }
    }

    pub fn a(&self) -> ParticleHandle { self.a }
    pub fn b(&self) -> ParticleHandle { self.b }
    pub fn rest_length(&self) -> F { self.rest_length }

    pub fn references(&self, particle: ParticleHandle) -> bool {
        self.a == particle || self.b == particle
    }

    /// Split the length error evenly between both endpoints.
    ///
    /// A pinned endpoint keeps its position; its half of the correction is not
    /// handed to the other end, so a link hanging from an anchor converges over
    /// several passes rather than in one.
    pub(crate) fn relax(&self, particles: &mut Arena<Particle<F>>) -> Relaxation {
        let (a_pos, a_pinned) = match particles.get(self.a.index()) {
            Some(p) => (p.pos, p.pinned),
            None => return Relaxation::Stale,
        };
        let (b_pos, b_pinned) = match particles.get(self.b.index()) {
            Some(p) => (p.pos, p.pinned),
            None => return Relaxation::Stale,
        };

        let delta = b_pos - a_pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return Relaxation::Degenerate;
        }

        let error = self.rest_length - dist;
        let fraction = error / dist / F::two();
        let offset = delta.scale(fraction);

        if !a_pinned {
            if let Some(p) = particles.get_mut(self.a.index()) {
                p.pos = p.pos - offset;
            }
        }
        if !b_pinned {
            if let Some(p) = particles.get_mut(self.b.index()) {
                p.pos = p.pos + offset;
            }
        }
        Relaxation::Applied
    }

    /// Current `|distance - rest_length|`, or `None` if an endpoint is gone.
    pub fn error(&self, particles: &Arena<Particle<F>>) -> Option<F> {
        let a = particles.get(self.a.index())?;
        let b = particles.get(self.b.index())?;
        Some((a.pos.distance(b.pos) - self.rest_length).abs())
    }
}
