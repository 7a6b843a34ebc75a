/// Control actions supported by the RK4 solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the samples so far.
    StopEarly,
}
