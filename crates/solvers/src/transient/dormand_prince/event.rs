/// Events emitted by the Dormand–Prince solver.
///
/// `Sampled` fires once per grid point, starting with the initial state at
/// index 0. `Accepted` and `Rejected` fire once per attempted step, before any
/// samples that step produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// A step passed the error test.
    Accepted {
        /// Time reached by the step.
        t: f64,
        /// Signed step size.
        h: f64,
        /// Scaled error norm (at most 1 for accepted steps).
        error: f64,
    },

    /// A step failed the error test and will be retried with a smaller size.
    Rejected {
        /// Time the step started from.
        t: f64,
        /// Signed step size that was attempted.
        h: f64,
        /// Scaled error norm (greater than 1, or NaN).
        error: f64,
    },

    /// A state was recorded at a grid point.
    Sampled {
        /// Index of the grid point.
        index: usize,
        /// The grid time.
        t: f64,
        /// The state at `t`.
        state: &'a [f64],
    },
}

impl Event<'_> {
    /// Returns the time associated with the event.
    #[must_use]
    pub fn t(&self) -> f64 {
        match self {
            Self::Accepted { t, .. } | Self::Rejected { t, .. } | Self::Sampled { t, .. } => *t,
        }
    }

    /// Returns the attempted step size, if the event is a step.
    #[must_use]
    pub fn step_size(&self) -> Option<f64> {
        match self {
            Self::Accepted { h, .. } | Self::Rejected { h, .. } => Some(*h),
            Self::Sampled { .. } => None,
        }
    }
}
