use attractor_core::VectorField;

/// The Hopf normal form.
///
/// ```text
/// dx/dt = (μ − r²) x − ω y
/// dy/dt = (μ − r²) y + ω x
/// ```
///
/// where `r² = x² + y²`. In polar coordinates the radius obeys
/// `dr/dt = r (μ − r²)` independently of the angle, so for `μ > 0` every
/// trajectory except the origin winds onto the circle `r = √μ`.
///
/// The defaults `μ = ω = 1` give the unit-circle limit cycle. The field is
/// evaluated with `()` parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hopf {
    /// Bifurcation parameter.
    pub mu: f64,

    /// Angular velocity on the cycle.
    pub omega: f64,
}

impl Default for Hopf {
    fn default() -> Self {
        Self {
            mu: 1.0,
            omega: 1.0,
        }
    }
}

impl Hopf {
    /// Returns the radius of the stable limit cycle, or `None` if `μ ≤ 0`.
    #[must_use]
    pub fn cycle_radius(&self) -> Option<f64> {
        (self.mu > 0.0).then(|| self.mu.sqrt())
    }

    /// Returns the cycle period `2π / |ω|`, or `None` without a cycle.
    #[must_use]
    pub fn cycle_period(&self) -> Option<f64> {
        self.cycle_radius()
            .filter(|_| self.omega != 0.0)
            .map(|_| std::f64::consts::TAU / self.omega.abs())
    }
}

impl VectorField<()> for Hopf {
    fn derivative(&self, state: &[f64], _t: f64, _params: &()) -> Vec<f64> {
        let &[x, y] = state else {
            return Vec::new();
        };
        let growth = self.mu - (x * x + y * y);
        vec![growth * x - self.omega * y, growth * y + self.omega * x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use attractor_core::linspace;
    use attractor_solvers::transient::{dormand_prince::Config, integrate};

    #[test]
    fn cycle_exists_only_for_positive_mu() {
        assert_eq!(Hopf::default().cycle_radius(), Some(1.0));
        assert_eq!(Hopf { mu: 4.0, omega: 1.0 }.cycle_radius(), Some(2.0));
        assert_eq!(Hopf { mu: -1.0, omega: 1.0 }.cycle_radius(), None);
        assert_eq!(Hopf { mu: -1.0, omega: 1.0 }.cycle_period(), None);
        assert_relative_eq!(
            Hopf::default().cycle_period().unwrap(),
            2.0 * std::f64::consts::PI
        );
    }

    #[test]
    fn cycle_is_invariant() {
        // On the cycle the field is tangent: ω times the rotated state.
        let dx = Hopf::default().derivative(&[0.6, 0.8], 0.0, &());

        assert_abs_diff_eq!(dx[0], -0.8, epsilon = 1e-15);
        assert_abs_diff_eq!(dx[1], 0.6, epsilon = 1e-15);
    }

    #[test]
    fn trajectories_wind_onto_the_cycle() {
        let system = Hopf::default();
        let times = linspace(0.0, 30.0, 600);

        for initial in [[0.1, 0.1], [0.5, 0.0], [1.5, 0.0], [0.0, -1.5]] {
            let trajectory = integrate(&system, &initial, &times, &(), &Config::default())
                .expect("should integrate");

            let last = trajectory.last().expect("non-empty");
            assert_abs_diff_eq!(last[0].hypot(last[1]), 1.0, epsilon = 1e-6);
        }
    }
}
