use attractor_core::{GridError, VectorField};
use thiserror::Error;

/// Errors caused by malformed solver inputs.
///
/// These indicate a caller bug and are reported before any integration step
/// is taken.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("initial state is empty")]
    EmptyState,

    #[error("initial state has non-finite value {value} at index {index}")]
    NonFiniteState { index: usize, value: f64 },

    #[error("invalid time grid: {0}")]
    Grid(#[from] GridError),

    #[error("vector field returned {found} components for a state of dimension {expected}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Checks that an initial state is non-empty and finite.
pub(crate) fn validate_state(state: &[f64]) -> Result<(), InputError> {
    if state.is_empty() {
        return Err(InputError::EmptyState);
    }
    match state.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        Some((index, &value)) => Err(InputError::NonFiniteState { index, value }),
        None => Ok(()),
    }
}

/// A vector field bound to its parameters, counting evaluations.
pub(crate) struct Rhs<'a, F: ?Sized, P: ?Sized> {
    field: &'a F,
    params: &'a P,
    evaluations: usize,
}

impl<'a, F, P> Rhs<'a, F, P>
where
    F: VectorField<P> + ?Sized,
    P: ?Sized,
{
    pub(crate) fn new(field: &'a F, params: &'a P) -> Self {
        Self {
            field,
            params,
            evaluations: 0,
        }
    }

    /// Evaluates the field, rejecting derivatives of the wrong dimension.
    pub(crate) fn eval(&mut self, t: f64, state: &[f64]) -> Result<Vec<f64>, InputError> {
        self.evaluations += 1;
        let derivative = self.field.derivative(state, t, self.params);
        if derivative.len() == state.len() {
            Ok(derivative)
        } else {
            Err(InputError::DimensionMismatch {
                expected: state.len(),
                found: derivative.len(),
            })
        }
    }

    pub(crate) fn evaluations(&self) -> usize {
        self.evaluations
    }
}
