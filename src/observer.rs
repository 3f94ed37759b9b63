//! Step observer trait for monitoring the simulation loop.

/// Hooks called from inside [`step`](crate::solver::step).
///
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after all free particles have been integrated.
    fn on_integrate(&mut self, _moved: usize) {}

    /// Called after each relaxation pass over the constraints.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called after the wall pass following relaxation pass `pass`.
    fn on_bounds_resolved(&mut self, _pass: usize, _contacts: usize) {}

    /// Called once per step with the number of constraints discarded.
    fn on_constraints_swept(&mut self, _removed: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards step events to `tracing` at trace level, and sweeps at debug.
#[derive(Default)]
pub struct TracingStepObserver {
    steps: u64,
}

impl TracingStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps completed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl StepObserver for TracingStepObserver {
    fn on_integrate(&mut self, moved: usize) {
        tracing::trace!(step = self.steps, moved, "integrated");
    }

    fn on_relaxation_pass(&mut self, pass: usize) {
        tracing::trace!(step = self.steps, pass, "relaxation pass");
    }

    fn on_bounds_resolved(&mut self, pass: usize, contacts: usize) {
        if contacts > 0 {
            tracing::trace!(step = self.steps, pass, contacts, "wall contacts");
        }
    }

    fn on_constraints_swept(&mut self, removed: usize) {
        if removed > 0 {
            tracing::debug!(step = self.steps, removed, "fallen constraints swept");
        }
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
