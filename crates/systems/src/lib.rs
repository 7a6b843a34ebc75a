//! Vector fields and analysis helpers for classic dynamical systems.
//!
//! Each system implements [`VectorField`](attractor_core::VectorField), so it
//! can be handed directly to any solver in `attractor-solvers`:
//!
//! - [`Lorenz`] — the Lorenz attractor, parameterized by [`LorenzParams`]
//! - [`Linear2`] — planar linear systems and the classification of their origin
//! - [`LotkaVolterra`] — predator–prey dynamics with nullclines and equilibria
//! - [`Hopf`] — the Hopf normal form and its limit cycle
//! - [`Pitchfork`] — `dx/dt = r x − x³` and its bifurcation diagram
//!
//! [`Quadratic`] is a [`Liapunov`] function for checking stability along
//! trajectories, and [`ParameterSweep`] schedules parameter values frame by
//! frame for animated sweeps. [`direction_field`] and [`scalar_mesh`] sample
//! planar fields and level functions over a mesh for quiver and contour plots.

mod hopf;
mod liapunov;
mod linear;
mod lorenz;
mod lotka_volterra;
mod mesh;
mod pitchfork;
mod sweep;

pub use hopf::Hopf;
pub use liapunov::{Liapunov, Quadratic};
pub use linear::{Equilibrium, Linear2};
pub use lorenz::{Lorenz, LorenzParams};
pub use lotka_volterra::{LotkaVolterra, Nullcline, Nullclines};
pub use mesh::{Arrow, MeshError, direction_field, scalar_mesh};
pub use pitchfork::{BifurcationPoint, Branch, Pitchfork, Stability};
pub use sweep::{LorenzParam, LorenzSweep, ParameterSweep, SweepError};
