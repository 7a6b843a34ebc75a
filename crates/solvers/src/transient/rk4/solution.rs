use attractor_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Sampled every grid point.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an RK4 integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// States at each sampled grid point, starting with the initial state.
    pub trajectory: Trajectory,

    /// Number of RK4 steps taken.
    pub steps: usize,
}
