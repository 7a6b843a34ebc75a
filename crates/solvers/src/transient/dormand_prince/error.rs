use std::fmt;

use thiserror::Error;

use crate::transient::InputError;

/// Why the step-size controller gave up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stall {
    /// Too many attempted steps between two consecutive grid points.
    StepLimit { max_steps: usize },

    /// The step size fell below the floating-point spacing at the current time.
    StepTooSmall { h: f64 },
}

impl fmt::Display for Stall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StepLimit { max_steps } => {
                write!(f, "exceeded {max_steps} steps between grid points")
            }
            Self::StepTooSmall { h } => write!(f, "step size {h:e} is too small"),
        }
    }
}

/// Errors that can occur during Dormand–Prince integration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("integration did not converge after reaching t = {t_reached}: {stall}")]
    NonConvergent {
        /// The last time the solver successfully reached.
        t_reached: f64,
        stall: Stall,
    },
}
