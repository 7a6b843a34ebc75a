//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch either the adaptive or the fixed-step integrator.
//!
//! # Event traits
//!
//! - [`HasTime`] — events tied to a point in time
//! - [`HasState`] — events that may carry a sampled state
//! - [`HasStepSize`] — events that may carry a step size
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use attractor_core::Observer;
//! use attractor_observers::traits::{CanStopEarly, HasState};
//!
//! /// Stops once a sampled state leaves the ball of radius `radius`.
//! struct Escape {
//!     radius: f64,
//! }
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for Escape {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let norm = event.state()?.iter().map(|x| x * x).sum::<f64>().sqrt();
//!         (norm > self.radius).then(A::stop_early)
//!     }
//! }
//! ```

use attractor_solvers::transient::{dormand_prince, rk4};

/// An event tied to a point in time.
pub trait HasTime {
    /// Returns the time this event refers to.
    fn time(&self) -> f64;
}

/// An event that may carry a sampled state.
pub trait HasState {
    /// Returns the state recorded by this event, if any.
    fn state(&self) -> Option<&[f64]>;
}

/// An event that may carry a step size.
pub trait HasStepSize {
    /// Returns the signed step size, if this event describes a step.
    fn step_size(&self) -> Option<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- dormand_prince::Event ---

impl HasTime for dormand_prince::Event<'_> {
    fn time(&self) -> f64 {
        self.t()
    }
}

impl HasState for dormand_prince::Event<'_> {
    fn state(&self) -> Option<&[f64]> {
        match self {
            dormand_prince::Event::Sampled { state, .. } => Some(*state),
            dormand_prince::Event::Accepted { .. } | dormand_prince::Event::Rejected { .. } => None,
        }
    }
}

impl HasStepSize for dormand_prince::Event<'_> {
    fn step_size(&self) -> Option<f64> {
        dormand_prince::Event::step_size(self)
    }
}

// --- rk4::Event ---

impl HasTime for rk4::Event<'_> {
    fn time(&self) -> f64 {
        self.t
    }
}

impl HasState for rk4::Event<'_> {
    fn state(&self) -> Option<&[f64]> {
        Some(self.state)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for dormand_prince::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for rk4::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use attractor_core::{Observer, linspace};
    use attractor_solvers::transient::dormand_prince::{Config, Status};

    /// Counts sampled states and stops after `limit` of them.
    struct StopAfter {
        limit: usize,
        seen: Vec<f64>,
    }

    impl<E, A> Observer<E, A> for StopAfter
    where
        E: HasTime + HasState,
        A: CanStopEarly,
    {
        fn observe(&mut self, event: &E) -> Option<A> {
            event.state()?;
            self.seen.push(event.time());
            (self.seen.len() >= self.limit).then(A::stop_early)
        }
    }

    fn growth(x: &[f64], _t: f64, _p: &()) -> Vec<f64> {
        vec![x[0]]
    }

    #[test]
    fn same_observer_drives_both_solvers() {
        let times = linspace(0.0, 1.0, 11);

        let mut adaptive = StopAfter {
            limit: 4,
            seen: Vec::new(),
        };
        let solution = dormand_prince::solve(
            &growth,
            &[1.0],
            &times,
            &(),
            &Config::default(),
            |event: &dormand_prince::Event<'_>| adaptive.observe(event),
        )
        .expect("should stop early");
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(adaptive.seen, times[..4]);

        let mut fixed = StopAfter {
            limit: 4,
            seen: Vec::new(),
        };
        let solution = rk4::solve(&growth, &[1.0], &times, &(), 4, |event: &rk4::Event<'_>| {
            fixed.observe(event)
        })
        .expect("should stop early");
        assert_eq!(solution.status, rk4::Status::StoppedByObserver);
        assert_eq!(fixed.seen, times[..4]);
    }

    #[test]
    fn step_events_carry_no_state() {
        let event = dormand_prince::Event::Accepted {
            t: 0.5,
            h: 0.1,
            error: 0.2,
        };

        assert_eq!(HasState::state(&event), None);
        assert_eq!(HasStepSize::step_size(&event), Some(0.1));
        assert_eq!(event.time(), 0.5);
    }
}
