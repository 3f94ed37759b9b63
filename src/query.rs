//! Picking particles and cutting constraints.

use crate::float::Float;
use crate::scene::{ConstraintHandle, ParticleHandle, Scene};
use crate::vec::Vec2;
use alloc::vec::Vec;

/// Whether a point exactly on the tolerance circle counts as a hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitMode {
    /// `distance < tolerance`. Used for pinning, deleting and finishing a link.
    Strict,
    /// `distance <= tolerance`. Used when a press decides between grabbing and placing.
    Inclusive,
}

impl HitMode {
    fn hits<F: Float>(self, pos: Vec2<F>, point: Vec2<F>, tolerance: F) -> bool {
        let d2 = pos.distance_sq(point);
        let r2 = tolerance * tolerance;
        match self {
            HitMode::Strict => d2 < r2,
            HitMode::Inclusive => d2 <= r2,
        }
    }
}

/// Whether segment `p0-p1` crosses segment `q0-q1`.
///
/// Both segments are treated as lines `y = m*x + c`; the crossing x must fall
/// inside both x-ranges. Vertical segments and equal slopes never cross.
pub fn segments_cross<F: Float>(p0: Vec2<F>, p1: Vec2<F>, q0: Vec2<F>, q1: Vec2<F>) -> bool {
    if p0.x == p1.x || q0.x == q1.x {
        return false;
    }
    let m1 = (p0.y - p1.y) / (p0.x - p1.x);
    let m2 = (q0.y - q1.y) / (q0.x - q1.x);
    if m1 == m2 {
        return false;
    }
    let c1 = p0.y - m1 * p0.x;
    let c2 = q0.y - m2 * q0.x;
    let x = (c2 - c1) / (m1 - m2);

    let in_p = x >= p0.x.min(p1.x) && x <= p0.x.max(p1.x);
    let in_q = x >= q0.x.min(q1.x) && x <= q0.x.max(q1.x);
    in_p && in_q
}

impl<F: Float> Scene<F> {
    /// First particle (slot order) within its own radius of `point`.
    pub fn hit_test(&self, point: Vec2<F>, mode: HitMode) -> Option<ParticleHandle> {
        self.particles()
            .find(|(_, p)| mode.hits(p.pos, point, p.radius))
            .map(|(h, _)| h)
    }

    /// First particle within `tolerance` of `point`, ignoring radii.
    pub fn hit_test_within(&self, point: Vec2<F>, tolerance: F, mode: HitMode) -> Option<ParticleHandle> {
        self.particles()
            .find(|(_, p)| mode.hits(p.pos, point, tolerance))
            .map(|(h, _)| h)
    }

    /// Every particle within its own radius of `point`.
    pub fn hits(&self, point: Vec2<F>, mode: HitMode) -> Vec<ParticleHandle> {
        self.particles()
            .filter(|(_, p)| mode.hits(p.pos, point, p.radius))
            .map(|(h, _)| h)
            .collect()
    }

    /// Constraints whose current segment crosses `start-end`.
    pub fn find_constraints_crossing(&self, start: Vec2<F>, end: Vec2<F>) -> Vec<ConstraintHandle> {
        self.constraints()
            .filter_map(|(h, _)| {
                let (a, b) = self.segment(h)?;
                if segments_cross(start, end, a, b) { Some(h) } else { None }
            })
            .collect()
    }

    /// Remove every constraint crossing `start-end`. Returns how many went.
    pub fn cut(&mut self, start: Vec2<F>, end: Vec2<F>) -> usize {
        let crossing = self.find_constraints_crossing(start, end);
        let removed = self.remove_constraints(&crossing);
        if removed > 0 {
            tracing::debug!(removed, "constraints cut");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vec2<f64> {
        Vec2::new(x, y)
    }

    #[test]
    fn crossing_diagonals() {
        assert!(segments_cross(v(0.0, 0.0), v(10.0, 10.0), v(0.0, 10.0), v(10.0, 0.0)));
    }

    #[test]
    fn disjoint_ranges_do_not_cross() {
        // lines meet at x = 5, outside the second segment
        assert!(!segments_cross(v(0.0, 0.0), v(10.0, 10.0), v(6.0, 4.0), v(8.0, 2.0)));
    }

    #[test]
    fn vertical_segments_never_cross() {
        assert!(!segments_cross(v(5.0, -10.0), v(5.0, 10.0), v(0.0, 0.0), v(10.0, 0.0)));
        assert!(!segments_cross(v(0.0, 0.0), v(10.0, 0.0), v(5.0, -10.0), v(5.0, 10.0)));
    }

    #[test]
    fn parallel_segments_never_cross() {
        assert!(!segments_cross(v(0.0, 0.0), v(10.0, 0.0), v(0.0, 0.0), v(10.0, 0.0)));
    }

    #[test]
    fn endpoint_touch_counts() {
        assert!(segments_cross(v(0.0, 0.0), v(5.0, 5.0), v(5.0, 5.0), v(10.0, 0.0)));
    }

    #[test]
    fn hit_modes_differ_on_the_rim() {
        let mut scene: Scene<f64> = Scene::new();
        let p = scene.add_particle(v(0.0, 0.0));
        assert_eq!(scene.hit_test(v(5.0, 0.0), HitMode::Strict), None);
        assert_eq!(scene.hit_test(v(5.0, 0.0), HitMode::Inclusive), Some(p));
        assert_eq!(scene.hit_test(v(4.0, 0.0), HitMode::Strict), Some(p));
    }

    #[test]
    fn hit_test_returns_first_in_slot_order() {
        let mut scene: Scene<f64> = Scene::new();
        let first = scene.add_particle(v(0.0, 0.0));
        let second = scene.add_particle(v(1.0, 0.0));
        assert_eq!(scene.hit_test(v(0.5, 0.0), HitMode::Strict), Some(first));
        assert_eq!(scene.hits(v(0.5, 0.0), HitMode::Strict), alloc::vec![first, second]);
    }

    #[test]
    fn explicit_tolerance_overrides_radius() {
        let mut scene: Scene<f64> = Scene::new();
        let p = scene.add_particle(v(0.0, 0.0));
        assert_eq!(scene.hit_test_within(v(8.0, 0.0), 10.0, HitMode::Strict), Some(p));
        assert_eq!(scene.hit_test_within(v(3.0, 0.0), 2.0, HitMode::Inclusive), None);
    }
}
