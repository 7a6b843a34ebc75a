//! Shared fixtures for cross-crate integration tests.

use attractor_core::linspace;

/// The Lorenz initial state used throughout the scripts.
pub const LORENZ_START: [f64; 3] = [1.0, 1.0, 1.0];

/// 10,000 evenly spaced times over `[0, 40]`.
#[must_use]
pub fn lorenz_times() -> Vec<f64> {
    linspace(0.0, 40.0, 10_000)
}

/// Euclidean distance of a planar state from the origin.
#[must_use]
pub fn radius(state: &[f64]) -> f64 {
    state[0].hypot(state[1])
}
