//! The per-frame simulation loop: integrate, relax, bounce, sweep.

use crate::arena::Index;
use crate::config::SimConfig;
use crate::constraint::Relaxation;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::scene::Scene;
use alloc::vec::Vec;

/// Advance every free particle by one Verlet step. Returns how many moved.
pub fn integrate<F: Float>(scene: &mut Scene<F>, gravity: F, damping: F) -> usize {
    let mut moved = 0;
    for p in scene.particles.values_mut().filter(|p| !p.pinned) {
        p.integrate(gravity, damping);
        moved += 1;
    }
    moved
}

/// One relaxation pass over every constraint, in slot order.
///
/// Corrections are applied in place, so later constraints see the effect of
/// earlier ones within the same pass. Constraints with a missing endpoint are
/// removed after the pass; the count is returned.
pub fn relax<F: Float>(scene: &mut Scene<F>) -> usize {
    let mut saw_stale = false;
    for c in scene.constraints.values() {
        if c.relax(&mut scene.particles) == Relaxation::Stale {
            saw_stale = true;
        }
    }
    if saw_stale { scene.drop_dangling() } else { 0 }
}

/// Keep free particles inside `config.bounds`. Returns the number of wall contacts.
pub fn resolve_bounds<F: Float>(scene: &mut Scene<F>, config: &SimConfig<F>) -> usize {
    let bounds = config.bounds;
    scene
        .particles
        .values_mut()
        .filter_map(|p| bounds.resolve(p, config.damping, config.bounce))
        .count()
}

/// Discard constraints whose endpoints have both fallen past `threshold`.
///
/// The particles themselves are kept.
pub fn sweep_fallen<F: Float>(scene: &mut Scene<F>, threshold: F) -> usize {
    let particles = &scene.particles;
    let fallen: Vec<Index> = scene
        .constraints
        .iter()
        .filter(|(_, c)| {
            match (particles.get(c.a().index()), particles.get(c.b().index())) {
                (Some(a), Some(b)) => a.pos.y.min(b.pos.y) > threshold,
                _ => false,
            }
        })
        .map(|(index, _)| index)
        .collect();
    for index in fallen.iter() {
        scene.constraints.remove(*index);
    }
    fallen.len()
}

/// Run one frame.
///
/// Integrates once, then performs `config.stiffness` rounds of a relaxation
/// pass followed (if `bounce_enabled`) by a wall pass, then sweeps fallen
/// constraints.
pub fn step<F: Float, O: StepObserver>(scene: &mut Scene<F>, config: &SimConfig<F>, observer: &mut O) {
    let moved = integrate(scene, config.gravity, config.damping);
    observer.on_integrate(moved);

    for pass in 0..config.stiffness.max(1) {
        relax(scene);
        observer.on_relaxation_pass(pass);
        if config.bounce_enabled {
            let contacts = resolve_bounds(scene, config);
            observer.on_bounds_resolved(pass, contacts);
        }
    }

    let removed = sweep_fallen(scene, config.fall_threshold);
    observer.on_constraints_swept(removed);
    observer.on_step_complete();
}

impl<F: Float> Scene<F> {
    /// Shorthand for [`step`].
    pub fn step<O: StepObserver>(&mut self, config: &SimConfig<F>, observer: &mut O) {
        step(self, config, observer);
    }
}
