use attractor_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every grid point was sampled.
    Complete,

    /// Stopped early due to an observer action.
    ///
    /// The trajectory holds only the samples recorded before the stop.
    StoppedByObserver,
}

/// Work counters for a single integration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of vector field evaluations.
    pub evaluations: usize,

    /// Number of accepted steps.
    pub accepted: usize,

    /// Number of rejected steps.
    pub rejected: usize,
}

/// The result of a Dormand–Prince integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// States at each sampled grid point, starting with the initial state.
    pub trajectory: Trajectory,

    /// Work performed.
    pub stats: Stats,
}
