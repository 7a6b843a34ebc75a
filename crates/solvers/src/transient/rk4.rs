//! Classic fixed-step fourth-order Runge–Kutta integration.
//!
//! Each grid interval is split into `substeps` equal steps of
//!
//! ```text
//! k1 = f(x, t)
//! k2 = f(x + h/2 k1, t + h/2)
//! k3 = f(x + h/2 k2, t + h/2)
//! k4 = f(x + h k3, t + h)
//! x_next = x + h/6 (k1 + 2 k2 + 2 k3 + k4)
//! ```
//!
//! There is no error control: accuracy depends on the grid spacing and
//! `substeps`. Prefer [`dormand_prince`](super::dormand_prince) unless a fixed
//! amount of work per sample matters more than a guaranteed tolerance.
//!
//! # Example
//!
//! ```
//! use attractor_solvers::transient::rk4;
//!
//! let decay = |x: &[f64], _t: f64, _p: &()| vec![-x[0]];
//!
//! let solution = rk4::solve_unobserved(&decay, &[1.0], &[0.0, 1.0], &(), 100)
//!     .expect("should integrate");
//!
//! let last = solution.trajectory.last().unwrap();
//! assert!((last[0] - (-1.0_f64).exp()).abs() < 1e-9);
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use attractor_core::{Observer, TimeGrid, Trajectory, VectorField};

use crate::transient::{
    InputError,
    input::{Rhs, validate_state},
};

/// Integrates `field` over `times` with `substeps` RK4 steps per interval.
///
/// # Observer
///
/// The observer receives an [`Event`] for each grid sample, including the
/// initial state, and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for a malformed grid, initial state, or
/// field dimension, [`Error::ZeroSubsteps`] if `substeps` is zero, and
/// [`Error::NonFinite`] if the state overflows or becomes NaN.
pub fn solve<F, P, Obs>(
    field: &F,
    initial_state: &[f64],
    times: &[f64],
    params: &P,
    substeps: usize,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorField<P> + ?Sized,
    P: ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let grid = TimeGrid::new(times).map_err(InputError::from)?;
    validate_state(initial_state)?;
    if substeps == 0 {
        return Err(Error::ZeroSubsteps);
    }

    let mut rhs = Rhs::new(field, params);
    let mut trajectory = Trajectory::with_capacity(initial_state.len(), grid.len());
    let mut state = initial_state.to_vec();
    let mut steps = 0;

    trajectory.push(grid.start(), &state);
    let event = Event {
        index: 0,
        t: grid.start(),
        state: &state,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory,
            steps,
        });
    }

    for (index, pair) in times.windows(2).enumerate() {
        let (t_start, t_end) = (pair[0], pair[1]);
        #[allow(clippy::cast_precision_loss)]
        let h = (t_end - t_start) / substeps as f64;

        for substep in 0..substeps {
            #[allow(clippy::cast_precision_loss)]
            let t = t_start + h * substep as f64;
            let next = step(&mut rhs, t, &state, h)?;
            if next.iter().any(|v| !v.is_finite()) {
                return Err(Error::NonFinite { t_reached: t });
            }
            state = next;
            steps += 1;
        }

        trajectory.push(t_end, &state);
        let event = Event {
            index: index + 1,
            t: t_end,
            state: &state,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps,
    })
}

/// Integrates `field` over `times` without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F, P>(
    field: &F,
    initial_state: &[f64],
    times: &[f64],
    params: &P,
    substeps: usize,
) -> Result<Solution, Error>
where
    F: VectorField<P> + ?Sized,
    P: ?Sized,
{
    solve(field, initial_state, times, params, substeps, ())
}

/// Takes one RK4 step of signed size `h` from `(t, x)`.
fn step<F, P>(rhs: &mut Rhs<'_, F, P>, t: f64, x: &[f64], h: f64) -> Result<Vec<f64>, InputError>
where
    F: VectorField<P> + ?Sized,
    P: ?Sized,
{
    let offset = |k: &[f64], scale: f64| -> Vec<f64> {
        x.iter().zip(k).map(|(xi, ki)| xi + scale * ki).collect()
    };

    let k1 = rhs.eval(t, x)?;
    let k2 = rhs.eval(t + h / 2.0, &offset(&k1, h / 2.0))?;
    let k3 = rhs.eval(t + h / 2.0, &offset(&k2, h / 2.0))?;
    let k4 = rhs.eval(t + h, &offset(&k3, h))?;

    Ok(x.iter()
        .enumerate()
        .map(|(i, xi)| xi + h / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]))
        .collect())
}
