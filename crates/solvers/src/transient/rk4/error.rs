use thiserror::Error;

use crate::transient::InputError;

/// Errors that can occur during RK4 integration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("substeps must be at least 1")]
    ZeroSubsteps,

    #[error("state became non-finite after reaching t = {t_reached}")]
    NonFinite {
        /// The last time at which the state was finite.
        t_reached: f64,
    },
}
