//! Independent Dormand–Prince integrations spread across threads.
//!
//! Phase portraits integrate a family of initial states through one field,
//! and parameter sweeps integrate one initial state through a family of
//! parameter values. Neither run shares mutable state with another, so each
//! call here hands its inputs to the rayon thread pool and returns one result
//! per input in input order.

use attractor_core::VectorField;
use rayon::prelude::*;

use crate::transient::dormand_prince::{self, Config, Error, Solution};

/// Integrates `field` from each of `initial_states` over the same `times`.
///
/// A failure for one initial state does not affect the others.
pub fn integrate_many<F, P, S>(
    field: &F,
    initial_states: &[S],
    times: &[f64],
    params: &P,
    config: &Config,
) -> Vec<Result<Solution, Error>>
where
    F: VectorField<P> + Sync + ?Sized,
    P: Sync + ?Sized,
    S: AsRef<[f64]> + Sync,
{
    initial_states
        .par_iter()
        .map(|state| dormand_prince::solve_unobserved(field, state.as_ref(), times, params, config))
        .collect()
}

/// Integrates `field` from `initial_state` once per entry of `params`.
///
/// A failure for one parameter value does not affect the others.
pub fn sweep<F, P>(
    field: &F,
    initial_state: &[f64],
    times: &[f64],
    params: &[P],
    config: &Config,
) -> Vec<Result<Solution, Error>>
where
    F: VectorField<P> + Sync + ?Sized,
    P: Sync,
{
    params
        .par_iter()
        .map(|params| dormand_prince::solve_unobserved(field, initial_state, times, params, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use attractor_core::linspace;

    use crate::transient::{InputError, dormand_prince::Status};

    fn decay(x: &[f64], _t: f64, rate: &f64) -> Vec<f64> {
        vec![-rate * x[0]]
    }

    #[test]
    fn many_initial_states_keep_their_order() {
        let initial_states: Vec<Vec<f64>> = (1..=25).map(|i| vec![f64::from(i)]).collect();
        let times = linspace(0.0, 1.0, 5);

        let results = integrate_many(&decay, &initial_states, &times, &1.0, &Config::default());

        assert_eq!(results.len(), initial_states.len());
        for (initial, result) in initial_states.iter().zip(&results) {
            let solution = result.as_ref().expect("should integrate");
            assert_eq!(solution.status, Status::Complete);
            assert_eq!(solution.trajectory.first(), Some(&initial[..]));
            assert_relative_eq!(
                solution.trajectory.last().unwrap()[0],
                initial[0] * (-1.0_f64).exp(),
                max_relative = 1e-7
            );
        }
    }

    #[test]
    fn matches_sequential_integration() {
        let oscillator = |x: &[f64], _t: f64, _p: &()| vec![x[1], -x[0]];
        let initial_states = [[1.0, 0.0], [0.0, 2.0], [-0.5, 0.5]];
        let times = linspace(0.0, 6.0, 13);
        let config = Config::default();

        let results = integrate_many(&oscillator, &initial_states, &times, &(), &config);

        for (initial, result) in initial_states.iter().zip(results) {
            let parallel = result.expect("should integrate");
            let sequential =
                dormand_prince::solve_unobserved(&oscillator, initial, &times, &(), &config)
                    .expect("should integrate");
            assert_eq!(parallel.trajectory, sequential.trajectory);
        }
    }

    #[test]
    fn failures_stay_in_their_slot() {
        let initial_states: [&[f64]; 3] = [&[1.0], &[], &[2.0]];

        let results =
            integrate_many(&decay, &initial_states, &[0.0, 1.0], &1.0, &Config::default());

        assert!(results[0].is_ok());
        assert_eq!(
            results[1].as_ref().unwrap_err(),
            &Error::InvalidInput(InputError::EmptyState)
        );
        assert!(results[2].is_ok());
    }

    #[test]
    fn sweep_uses_each_parameter() {
        let rates = [0.0, 0.5, 1.0, 2.0];

        let results = sweep(&decay, &[1.0], &[0.0, 1.0], &rates, &Config::default());

        assert_eq!(results.len(), rates.len());
        for (rate, result) in rates.iter().zip(results) {
            let solution = result.expect("should integrate");
            assert_relative_eq!(
                solution.trajectory.last().unwrap()[0],
                (-rate).exp(),
                max_relative = 1e-7
            );
        }
    }

    #[test]
    fn empty_inputs_give_empty_results() {
        let none: [Vec<f64>; 0] = [];
        assert!(integrate_many(&decay, &none, &[0.0, 1.0], &1.0, &Config::default()).is_empty());
        assert!(sweep(&decay, &[1.0], &[0.0, 1.0], &[], &Config::default()).is_empty());
    }
}
