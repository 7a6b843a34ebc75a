//! Core traits and types for integrating dynamical systems.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! system definitions build on:
//!
//! - [`VectorField`] — the right-hand side `f(state, t, params)` of an ODE
//! - [`TimeGrid`] — a validated, strictly monotonic sequence of sample times
//! - [`Trajectory`] — the states a solver produced at each sample time
//! - [`Observer`] — receives solver events and optionally returns control actions

mod field;
mod grid;
mod observer;
mod trajectory;

pub use field::VectorField;
pub use grid::{Direction, GridError, TimeGrid, linspace};
pub use observer::Observer;
pub use trajectory::{Trajectory, TrajectoryError};
