/// Event emitted by the RK4 solver for each grid sample.
///
/// Index 0 is the initial state before any integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'a> {
    /// Index of the grid point.
    pub index: usize,

    /// The grid time.
    pub t: f64,

    /// The state at `t`.
    pub state: &'a [f64],
}
