use attractor_core::Observer;
use attractor_observers::traits::{CanStopEarly, HasState, HasTime};
use attractor_solvers::transient::{
    dormand_prince::{self, Config, Error},
    rk4,
};

/// Stops once a sampled state leaves the ball of radius `radius`.
struct Escape {
    radius: f64,
    escaped_at: Option<f64>,
}

impl Escape {
    fn new(radius: f64) -> Self {
        Self {
            radius,
            escaped_at: None,
        }
    }
}

impl<E, A> Observer<E, A> for Escape
where
    E: HasTime + HasState,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let norm = event.state()?.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > self.radius {
            self.escaped_at = Some(event.time());
            return Some(A::stop_early());
        }
        None
    }
}

fn square(x: &[f64], _t: f64, _p: &()) -> Vec<f64> {
    vec![x[0] * x[0]]
}

const TIMES: [f64; 5] = [0.0, 0.5, 0.9, 0.99, 2.0];

#[test]
fn blow_up_fails_without_an_observer() {
    let err = dormand_prince::solve_unobserved(&square, &[1.0], &TIMES, &(), &Config::default())
        .unwrap_err();
    assert!(matches!(err, Error::NonConvergent { .. }));
}

#[test]
fn escape_stops_the_adaptive_solver() {
    let mut escape = Escape::new(50.0);

    let solution = dormand_prince::solve(
        &square,
        &[1.0],
        &TIMES,
        &(),
        &Config::default(),
        |event: &dormand_prince::Event<'_>| escape.observe(event),
    )
    .expect("observer stops before the blow-up");

    assert_eq!(solution.status, dormand_prince::Status::StoppedByObserver);
    assert_eq!(solution.trajectory.len(), 4);
    assert_eq!(escape.escaped_at, Some(0.99));
}

#[test]
fn escape_stops_the_fixed_step_solver() {
    let mut escape = Escape::new(50.0);

    let solution = rk4::solve(&square, &[1.0], &TIMES, &(), 100, |event: &rk4::Event<'_>| {
        escape.observe(event)
    })
    .expect("observer stops before the blow-up");

    assert_eq!(solution.status, rk4::Status::StoppedByObserver);
    assert_eq!(solution.trajectory.len(), 4);
    assert_eq!(escape.escaped_at, Some(0.99));
}
