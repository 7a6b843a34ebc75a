//! Solvers for initial value problems `dx/dt = f(x, t, params)`.
//!
//! Every solver in this module takes a [`VectorField`], an initial state, a
//! slice of sample times whose first entry is the initial time, and the
//! field's parameters. It returns one state per sample time.
//!
//! # Solvers
//!
//! - [`dormand_prince`] — adaptive embedded Runge–Kutta 4(5) with error
//!   control; the default choice
//! - [`rk4`] — classic fixed-step fourth-order Runge–Kutta
//!
//! [`batch`] runs many independent Dormand–Prince integrations across threads.

mod input;

pub mod batch;
pub mod dormand_prince;
pub mod rk4;

pub use input::InputError;

use attractor_core::{Trajectory, VectorField};

/// Integrates `field` from `initial_state` over `times` with Dormand–Prince.
///
/// This is a convenience wrapper around [`dormand_prince::solve_unobserved`]
/// that returns only the trajectory.
///
/// # Errors
///
/// Returns [`dormand_prince::Error::InvalidInput`] for malformed inputs and
/// [`dormand_prince::Error::NonConvergent`] if the tolerances cannot be met.
pub fn integrate<F, P>(
    field: &F,
    initial_state: &[f64],
    times: &[f64],
    params: &P,
    config: &dormand_prince::Config,
) -> Result<Trajectory, dormand_prince::Error>
where
    F: VectorField<P> + ?Sized,
    P: ?Sized,
{
    dormand_prince::solve_unobserved(field, initial_state, times, params, config)
        .map(|solution| solution.trajectory)
}
