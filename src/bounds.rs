//! Rectangular world bounds with velocity reflection.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// The edge a particle was pushed back from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Right,
    Left,
    Bottom,
    Top,
}

/// Axis-aligned simulation area. `min` is the top-left corner (y grows down).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Bounds<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        Bounds { min, max }
    }

    /// Bounds spanning `(0, 0)` to `(width, height)`.
    pub fn from_size(width: F, height: F) -> Self {
        Bounds { min: Vec2::zero(), max: Vec2::new(width, height) }
    }

    pub fn left(&self) -> F { self.min.x }
    pub fn right(&self) -> F { self.max.x }
    pub fn top(&self) -> F { self.min.y }
    pub fn bottom(&self) -> F { self.max.y }

    pub fn contains(&self, point: Vec2<F>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Push an escaped particle back onto the edge it crossed.
    ///
    /// The clamped axis of `prev_pos` is re-seeded ahead of the particle so the
    /// next integration carries it back inward at `bounce` times its speed.
    ///
    /// Only one edge is handled per call, checked right, left, bottom, top. A
    /// particle past a corner is fixed on the first matching edge only; the
    /// other axis is left for the next call.
    pub fn resolve(&self, p: &mut Particle<F>, damping: F, bounce: F) -> Option<Edge> {
        if p.pinned {
            return None;
        }
        let v = p.implied_velocity(damping);

        if p.pos.x > self.max.x {
            p.pos.x = self.max.x;
            p.prev_pos.x = p.pos.x + v.x * bounce;
            Some(Edge::Right)
        } else if p.pos.x < self.min.x {
            p.pos.x = self.min.x;
            p.prev_pos.x = p.pos.x + v.x * bounce;
            Some(Edge::Left)
        } else if p.pos.y > self.max.y {
            p.pos.y = self.max.y;
            p.prev_pos.y = p.pos.y + v.y * bounce;
            Some(Edge::Bottom)
        } else if p.pos.y < self.min.y {
            p.pos.y = self.min.y;
            p.prev_pos.y = p.pos.y + v.y * bounce;
            Some(Edge::Top)
        } else {
            None
        }
    }
}
