//! Numerical integrators for dynamical systems.
//!
//! # Modules
//!
//! - [`transient`] — initial value problem solvers that sample a trajectory on
//!   a time grid
//!
//! For the common case, [`integrate`] runs the adaptive Dormand–Prince solver
//! without an observer and returns the trajectory directly.

pub mod transient;

pub use transient::integrate;
