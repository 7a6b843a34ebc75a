//! Adaptive Dormand–Prince 5(4) integration.
//!
//! # Algorithm
//!
//! Each step evaluates six stages of an explicit Runge–Kutta pair (seven
//! counting the derivative at the new point, which is reused as the first
//! stage of the next step). The fifth-order result advances the solution; the
//! difference from the embedded fourth-order result estimates the local error.
//!
//! The error is measured as a root-mean-square over components, each scaled by
//! `abs_tol + rel_tol * max(|x_old|, |x_new|)`. A step is accepted when that
//! norm is at most 1, after which the step size grows by up to a factor of 10.
//! A rejected step is retried with a step at most half as large.
//!
//! Grid values come from step endpoints ([`Sampling::StepToPoint`], the
//! default) or the method's fourth-order interpolant
//! ([`Sampling::Interpolate`]).
//!
//! # Termination
//!
//! Integration completes once the last grid point has been sampled. It fails
//! with [`Error::NonConvergent`] if more than [`Config::max_steps`] steps are
//! attempted between two consecutive grid points, or if the step size shrinks
//! below the floating-point spacing of the current time (as happens when the
//! solution blows up in finite time).
//!
//! # Observer Events
//!
//! - [`Event::Sampled`] — a grid value was recorded (index 0 is the initial state)
//! - [`Event::Accepted`] — a step passed the error test
//! - [`Event::Rejected`] — a step failed the error test
//!
//! Observers can return [`Action::StopEarly`] after any event; the solution
//! then carries [`Status::StoppedByObserver`] and the samples recorded so far.
//!
//! # Example
//!
//! ```
//! use attractor_solvers::transient::dormand_prince::{self, Config};
//!
//! let decay = |x: &[f64], _t: f64, k: &f64| vec![-k * x[0]];
//! let times = [0.0, 1.0, 2.0];
//!
//! let solution =
//!     dormand_prince::solve_unobserved(&decay, &[1.0], &times, &1.0, &Config::default())
//!         .expect("should integrate");
//!
//! let last = solution.trajectory.last().unwrap();
//! assert!((last[0] - (-2.0_f64).exp()).abs() < 1e-8);
//! ```

mod action;
mod config;
mod error;
mod event;
mod interpolant;
mod solution;
mod stage;
mod step_size;
mod tableau;


pub use action::Action;
pub use config::{Config, ConfigError, Sampling};
pub use error::{Error, Stall};
pub use event::Event;
pub use solution::{Solution, Stats, Status};

use attractor_core::{Observer, TimeGrid, Trajectory, VectorField};

use crate::transient::{
    InputError,
    input::{Rhs, validate_state},
};

use interpolant::Interpolant;
use stage::attempt;
use step_size::{grow_factor, initial_step, min_step, shrink_factor};

/// Integrates `field` from `initial_state` at `times[0]` over `times`.
///
/// The observer receives an [`Event`] for every sample and every attempted
/// step. See the [module docs](self) for the algorithm and termination rules.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the grid or initial state is malformed,
/// or if the field returns a derivative of the wrong dimension. Returns
/// [`Error::NonConvergent`] if the step-size controller gives up.
pub fn solve<F, P, Obs>(
    field: &F,
    initial_state: &[f64],
    times: &[f64],
    params: &P,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorField<P> + ?Sized,
    P: ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let grid = TimeGrid::new(times).map_err(InputError::from)?;
    validate_state(initial_state)?;

    let mut rhs = Rhs::new(field, params);
    let t0 = grid.start();
    let f0 = rhs.eval(t0, initial_state)?;

    let mut trajectory = Trajectory::with_capacity(initial_state.len(), grid.len());
    let mut stats = Stats::default();

    trajectory.push(t0, initial_state);
    let event = Event::Sampled {
        index: 0,
        t: t0,
        state: initial_state,
    };
    if stops(&mut observer, &event) {
        return Ok(finish(Status::StoppedByObserver, trajectory, stats, &rhs));
    }
    if grid.len() == 1 {
        return Ok(finish(Status::Complete, trajectory, stats, &rhs));
    }

    let sign = grid.direction().sign();
    let (abs_tol, rel_tol) = (config.abs_tol(), config.rel_tol());

    let mut h_abs = match config.first_step() {
        Some(h) => h,
        None => initial_step(
            &mut rhs,
            t0,
            initial_state,
            &f0,
            sign,
            grid.span(),
            abs_tol,
            rel_tol,
        )?,
    };

    let mut t = t0;
    let mut y = initial_state.to_vec();
    let mut f = f0;
    let mut next = 1;
    let mut attempts = 0;
    let mut after_rejection = false;

    loop {
        let target = match config.sampling() {
            Sampling::StepToPoint => times[next],
            Sampling::Interpolate => grid.end(),
        };

        h_abs = h_abs.min(config.max_step());
        // A step that lands on the target is allowed below the spacing floor.
        if h_abs < min_step(t).min((target - t).abs()) {
            return Err(Error::NonConvergent {
                t_reached: t,
                stall: Stall::StepTooSmall { h: h_abs },
            });
        }

        attempts += 1;
        if attempts > config.max_steps() {
            return Err(Error::NonConvergent {
                t_reached: t,
                stall: Stall::StepLimit {
                    max_steps: config.max_steps(),
                },
            });
        }

        let mut t_new = t + h_abs * sign;
        if (t_new - target) * sign >= 0.0 {
            t_new = target;
        }
        let h = t_new - t;

        let step = attempt(&mut rhs, t, &y, &f, h, abs_tol, rel_tol)?;

        if step.error > 1.0 || step.error.is_nan() {
            stats.rejected += 1;
            let event = Event::Rejected {
                t,
                h,
                error: step.error,
            };
            if stops(&mut observer, &event) {
                return Ok(finish(Status::StoppedByObserver, trajectory, stats, &rhs));
            }

            h_abs = h.abs() * shrink_factor(step.error);
            after_rejection = true;
            continue;
        }

        stats.accepted += 1;
        let event = Event::Accepted {
            t: t_new,
            h,
            error: step.error,
        };
        if stops(&mut observer, &event) {
            return Ok(finish(Status::StoppedByObserver, trajectory, stats, &rhs));
        }

        let mut interpolant = None;
        while next < times.len() && (times[next] - t_new) * sign <= 0.0 {
            let t_sample = times[next];
            let interpolated;
            let state: &[f64] = if t_sample == t_new {
                &step.y
            } else {
                interpolated = interpolant
                    .get_or_insert_with(|| Interpolant::new(t, h, &y, &step.k))
                    .eval(t_sample);
                &interpolated
            };

            trajectory.push(t_sample, state);
            let event = Event::Sampled {
                index: next,
                t: t_sample,
                state,
            };
            next += 1;
            attempts = 0;

            if stops(&mut observer, &event) {
                return Ok(finish(Status::StoppedByObserver, trajectory, stats, &rhs));
            }
        }

        if next == times.len() {
            return Ok(finish(Status::Complete, trajectory, stats, &rhs));
        }

        h_abs = h.abs() * grow_factor(step.error, after_rejection);
        after_rejection = false;
        t = t_new;
        f = step.derivative().to_vec();
        y = step.y;
    }
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
    config: &Config,
) -> Result<Solution, Error>
where
    F: VectorField<P> + ?Sized,
    P: ?Sized,
{
    solve(field, initial_state, times, params, config, ())
}

fn stops<Obs>(observer: &mut Obs, event: &Event<'_>) -> bool
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    matches!(observer.observe(event), Some(Action::StopEarly))
}

fn finish<F, P>(
    status: Status,
    trajectory: Trajectory,
    stats: Stats,
    rhs: &Rhs<'_, F, P>,
) -> Solution
where
    F: VectorField<P> + ?Sized,
    P: ?Sized,
{
    Solution {
        status,
        trajectory,
        stats: Stats {
            evaluations: rhs.evaluations(),
            ..stats
        },
    }
}
