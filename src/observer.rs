//! Step observer trait for monitoring cloth simulation progress.

use crate::link::LinkKind;

/// Trait for observing cloth simulation steps.
///
/// Implement this trait to watch the solver (debug overlays, tear effects,
/// profiling). All methods have default no-op implementations. The trait is
/// object safe, so a `&mut dyn StepObserver` can be passed to a step.
pub trait StepObserver {
    /// Called for each link that broke during the link phase, before it is
    /// pruned. `a` and `b` are the flat particle indices of its endpoints.
    fn on_link_broken(&mut self, _a: usize, _b: usize, _kind: LinkKind) {}

    /// Called after each substep (links, integration, bounds).
    fn on_iteration(&mut self, _iteration: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Counts what happened over one or more steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepCounter {
    pub links_broken: usize,
    pub iterations: usize,
    pub steps: usize,
}

impl StepObserver for StepCounter {
    fn on_link_broken(&mut self, _a: usize, _b: usize, _kind: LinkKind) {
        self.links_broken += 1;
    }

    fn on_iteration(&mut self, _iteration: usize) {
        self.iterations += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
