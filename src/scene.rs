//! The scene: sole owner of every particle and constraint.

use crate::arena::{Arena, Index};
use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec;

/// Handle to a particle owned by a [`Scene`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleHandle(Index);

/// Handle to a constraint owned by a [`Scene`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintHandle(Index);

impl ParticleHandle {
    pub(crate) fn from_index(index: Index) -> Self { ParticleHandle(index) }
    pub fn index(&self) -> Index { self.0 }
}

impl ConstraintHandle {
    pub(crate) fn from_index(index: Index) -> Self { ConstraintHandle(index) }
    pub fn index(&self) -> Index { self.0 }
}

/// Particles and the distance constraints between them.
///
/// Handles stay valid until the element they name is removed; after that every
/// lookup through them returns `None`, even once the slot is reused.
#[derive(Clone, Debug)]
pub struct Scene<F: Float> {
    pub(crate) particles: Arena<Particle<F>>,
    pub(crate) constraints: Arena<DistanceConstraint<F>>,
}

impl<F: Float> Scene<F> {
    pub fn new() -> Self {
        Scene {
            particles: Arena::new(),
            constraints: Arena::new(),
        }
    }

    /// Place a particle at rest at `pos`.
    pub fn add_particle(&mut self, pos: Vec2<F>) -> ParticleHandle {
        self.insert_particle(Particle::new(pos))
    }

    pub fn insert_particle(&mut self, particle: Particle<F>) -> ParticleHandle {
        let handle = ParticleHandle(self.particles.insert(particle));
        tracing::trace!(slot = handle.0.slot(), "particle added");
        handle
    }

    /// Remove a particle together with every constraint that references it.
    ///
    /// Returns `None` for a stale handle.
    pub fn remove_particle(&mut self, handle: ParticleHandle) -> Option<Particle<F>> {
        let particle = self.particles.remove(handle.0)?;
        let attached = self.constraints_of(handle);
        for c in attached.iter() {
            self.constraints.remove(c.0);
        }
        tracing::debug!(
            slot = handle.0.slot(),
            constraints_removed = attached.len(),
            "particle removed"
        );
        Some(particle)
    }

    /// Link two particles at their current distance.
    pub fn add_constraint(
        &mut self,
        a: ParticleHandle,
        b: ParticleHandle,
    ) -> Result<ConstraintHandle, PhysicsError> {
        if a == b {
            return Err(PhysicsError::SelfLink);
        }
        let pa = self.particles.get(a.0).ok_or(PhysicsError::ParticleNotFound)?;
        let pb = self.particles.get(b.0).ok_or(PhysicsError::ParticleNotFound)?;
        let rest_length = pa.pos.distance(pb.pos);
        let handle = ConstraintHandle(self.constraints.insert(DistanceConstraint::new(a, b, rest_length)));
        tracing::trace!(slot = handle.0.slot(), "constraint added");
        Ok(handle)
    }

    pub fn remove_constraint(&mut self, handle: ConstraintHandle) -> Option<DistanceConstraint<F>> {
        self.constraints.remove(handle.0)
    }

    /// Remove a batch of constraints; stale or repeated handles are skipped.
    pub fn remove_constraints(&mut self, handles: &[ConstraintHandle]) -> usize {
        handles
            .iter()
            .filter(|h| self.constraints.remove(h.0).is_some())
            .count()
    }

    /// Every constraint with `particle` as an endpoint.
    pub fn constraints_of(&self, particle: ParticleHandle) -> Vec<ConstraintHandle> {
        self.constraints
            .iter()
            .filter(|(_, c)| c.references(particle))
            .map(|(index, _)| ConstraintHandle(index))
            .collect()
    }

    pub fn particle(&self, handle: ParticleHandle) -> Option<&Particle<F>> {
        self.particles.get(handle.0)
    }

    pub fn particle_mut(&mut self, handle: ParticleHandle) -> Option<&mut Particle<F>> {
        self.particles.get_mut(handle.0)
    }

    pub fn constraint(&self, handle: ConstraintHandle) -> Option<&DistanceConstraint<F>> {
        self.constraints.get(handle.0)
    }

    pub fn contains_particle(&self, handle: ParticleHandle) -> bool {
        self.particles.contains(handle.0)
    }

    pub fn contains_constraint(&self, handle: ConstraintHandle) -> bool {
        self.constraints.contains(handle.0)
    }

    /// Flip a particle's pinned state. `None` for a stale handle.
    pub fn toggle_pin(&mut self, handle: ParticleHandle) -> Option<bool> {
        self.particles.get_mut(handle.0).map(Particle::toggle_pin)
    }

    pub fn set_pinned(&mut self, handle: ParticleHandle, pinned: bool) -> Option<()> {
        let p = self.particles.get_mut(handle.0)?;
        if pinned {
            p.pin();
        } else {
            p.unpin();
        }
        Some(())
    }

    /// Particles in slot order.
    pub fn particles(&self) -> impl Iterator<Item = (ParticleHandle, &Particle<F>)> + '_ {
        self.particles.iter().map(|(index, p)| (ParticleHandle(index), p))
    }

    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintHandle, &DistanceConstraint<F>)> + '_ {
        self.constraints.iter().map(|(index, c)| (ConstraintHandle(index), c))
    }

    /// Current `|distance - rest_length|` of a constraint.
    pub fn constraint_error(&self, handle: ConstraintHandle) -> Option<F> {
        self.constraints.get(handle.0)?.error(&self.particles)
    }

    /// Endpoint positions of a constraint.
    pub fn segment(&self, handle: ConstraintHandle) -> Option<(Vec2<F>, Vec2<F>)> {
        let c = self.constraints.get(handle.0)?;
        self.endpoints(c)
    }

    /// Endpoint positions of every live constraint, for drawing.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.constraints.values().filter_map(move |c| self.endpoints(c))
    }

    pub fn positions(&self) -> Vec<Vec2<F>> {
        self.particles.values().map(|p| p.pos).collect()
    }

    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() && self.constraints.is_empty() }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.constraints.clear();
        tracing::debug!("scene cleared");
    }

    fn endpoints(&self, c: &DistanceConstraint<F>) -> Option<(Vec2<F>, Vec2<F>)> {
        let a = self.particles.get(c.a().0)?;
        let b = self.particles.get(c.b().0)?;
        Some((a.pos, b.pos))
    }

    /// Drop constraints whose endpoint no longer exists.
    pub(crate) fn drop_dangling(&mut self) -> usize {
        let dangling: Vec<Index> = self
            .constraints
            .iter()
            .filter(|(_, c)| !self.particles.contains(c.a().0) || !self.particles.contains(c.b().0))
            .map(|(index, _)| index)
            .collect();
        for index in dangling.iter() {
            self.constraints.remove(*index);
        }
        if !dangling.is_empty() {
            tracing::warn!(count = dangling.len(), "dropped constraints with missing endpoints");
        }
        dangling.len()
    }
}

impl<F: Float> Default for Scene<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_constraint_captures_current_distance() {
        let mut scene: Scene<f32> = Scene::new();
        let a = scene.add_particle(Vec2::new(0.0, 0.0));
        let b = scene.add_particle(Vec2::new(3.0, 4.0));
        let c = scene.add_constraint(a, b).unwrap();
        let rest = scene.constraint(c).unwrap().rest_length();
        assert!((rest - 5.0).abs() < 1e-6);
    }

    #[test]
    fn add_constraint_rejects_self_link_and_stale_handles() {
        let mut scene: Scene<f32> = Scene::new();
        let a = scene.add_particle(Vec2::new(0.0, 0.0));
        let b = scene.add_particle(Vec2::new(1.0, 0.0));
        assert_eq!(scene.add_constraint(a, a), Err(PhysicsError::SelfLink));
        scene.remove_particle(b);
        assert_eq!(scene.add_constraint(a, b), Err(PhysicsError::ParticleNotFound));
        assert_eq!(scene.constraint_count(), 0);
    }

    #[test]
    fn segments_follow_particle_positions() {
        let mut scene: Scene<f32> = Scene::new();
        let a = scene.add_particle(Vec2::new(0.0, 0.0));
        let b = scene.add_particle(Vec2::new(10.0, 0.0));
        let c = scene.add_constraint(a, b).unwrap();
        scene.particle_mut(b).unwrap().pos = Vec2::new(10.0, 10.0);
        assert_eq!(scene.segment(c), Some((Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0))));
        assert_eq!(scene.segments().count(), 1);
    }

    #[test]
    fn drop_dangling_removes_orphans_only() {
        let mut scene: Scene<f32> = Scene::new();
        let a = scene.add_particle(Vec2::new(0.0, 0.0));
        let b = scene.add_particle(Vec2::new(1.0, 0.0));
        let c = scene.add_particle(Vec2::new(2.0, 0.0));
        let ab = scene.add_constraint(a, b).unwrap();
        let bc = scene.add_constraint(b, c).unwrap();
        // bypass the cascade to simulate an orphan
        scene.particles.remove(c.index());
        assert_eq!(scene.drop_dangling(), 1);
        assert!(scene.contains_constraint(ab));
        assert!(!scene.contains_constraint(bc));
    }
}
