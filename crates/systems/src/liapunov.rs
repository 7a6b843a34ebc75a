use attractor_core::{Trajectory, VectorField};

/// A candidate Liapunov function `V(x)` for an equilibrium.
///
/// If `V` is positive definite around the equilibrium and its orbital
/// derivative `∇V · f` is non-positive, the equilibrium is stable.
pub trait Liapunov {
    /// Returns `V(x)`.
    fn value(&self, state: &[f64]) -> f64;

    /// Returns `∇V(x)`.
    fn gradient(&self, state: &[f64]) -> Vec<f64>;

    /// Returns `dV/dt = ∇V(x) · f(x, t)` along the flow of `field`.
    fn orbital_derivative<F, P>(&self, field: &F, state: &[f64], t: f64, params: &P) -> f64
    where
        F: VectorField<P> + ?Sized,
        P: ?Sized,
    {
        self.gradient(state)
            .iter()
            .zip(field.derivative(state, t, params))
            .map(|(g, f)| g * f)
            .sum()
    }

    /// Returns `true` if `V` never increases from one sample to the next.
    fn is_nonincreasing_along(&self, trajectory: &Trajectory) -> bool {
        let values: Vec<f64> = trajectory.iter().map(|(_, x)| self.value(x)).collect();
        values.windows(2).all(|pair| pair[1] <= pair[0])
    }
}

/// The quadratic Liapunov function `V(x) = ½ ‖x‖²`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quadratic;

impl Quadratic {
    /// Returns the radius of the level set `V(x) = level`, a sphere centered
    /// on the origin, or `None` for a negative level.
    #[must_use]
    pub fn level_radius(level: f64) -> Option<f64> {
        (level >= 0.0).then(|| (2.0 * level).sqrt())
    }
}

impl Liapunov for Quadratic {
    fn value(&self, state: &[f64]) -> f64 {
        0.5 * state.iter().map(|x| x * x).sum::<f64>()
    }

    fn gradient(&self, state: &[f64]) -> Vec<f64> {
        state.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use attractor_core::linspace;
    use attractor_solvers::transient::{dormand_prince::Config, integrate};

    use crate::{Hopf, Linear2};

    #[test]
    fn value_and_level_sets() {
        assert_relative_eq!(Quadratic.value(&[1.0, 2.0, 2.0]), 4.5);
        assert_eq!(Quadratic::level_radius(0.5), Some(1.0));
        assert_eq!(Quadratic::level_radius(-1.0), None);
    }

    #[test]
    fn orbital_derivative_of_sink_is_negative() {
        // For dx = −x, dV/dt = −‖x‖² = −2V.
        let state = [1.5, -1.0];
        let rate = Quadratic.orbital_derivative(&Linear2::sink(), &state, 0.0, &());

        assert_relative_eq!(rate, -2.0 * Quadratic.value(&state));
    }

    #[test]
    fn orbital_derivative_vanishes_on_limit_cycle() {
        let rate = Quadratic.orbital_derivative(&Hopf::default(), &[0.0, 1.0], 0.0, &());
        assert_relative_eq!(rate, 0.0);
    }

    #[test]
    fn nonincreasing_along_sink_trajectories() {
        let times = linspace(0.0, 5.0, 200);

        for initial in [[1.5, 1.5], [1.0, -1.0], [-1.0, 1.0], [-1.5, -1.0]] {
            let trajectory = integrate(&Linear2::sink(), &initial, &times, &(), &Config::default())
                .expect("should integrate");
            assert!(Quadratic.is_nonincreasing_along(&trajectory));
        }
    }

    #[test]
    fn increasing_along_saddle_trajectories() {
        let times = linspace(0.0, 2.0, 50);

        let trajectory = integrate(&Linear2::saddle(), &[0.5, 0.5], &times, &(), &Config::default())
            .expect("should integrate");
        assert!(!Quadratic.is_nonincreasing_along(&trajectory));
    }
}
