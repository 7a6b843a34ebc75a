use attractor_core::VectorField;

/// The Lorenz system.
///
/// ```text
/// dx/dt = σ (y − x)
/// dy/dt = x (ρ − z) − y
/// dz/dt = x y − β z
/// ```
///
/// The state is `[x, y, z]`. A state of any other dimension yields an empty
/// derivative, which solvers report as a dimension mismatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lorenz;

/// Parameters of the [`Lorenz`] system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LorenzParams {
    /// Prandtl number σ.
    pub sigma: f64,

    /// Geometric factor β.
    pub beta: f64,

    /// Rayleigh number ρ.
    pub rho: f64,
}

impl Default for LorenzParams {
    /// The classic chaotic regime: σ = 10, β = 8/3, ρ = 28.
    fn default() -> Self {
        Self {
            sigma: 10.0,
            beta: 8.0 / 3.0,
            rho: 28.0,
        }
    }
}

impl LorenzParams {
    /// Returns the equilibria of the system.
    ///
    /// The origin is always an equilibrium. For `ρ > 1` (and `β > 0`) the pair
    /// `C± = (±√(β(ρ − 1)), ±√(β(ρ − 1)), ρ − 1)` follows it.
    #[must_use]
    pub fn equilibria(&self) -> Vec<[f64; 3]> {
        let mut points = vec![[0.0; 3]];

        let squared = self.beta * (self.rho - 1.0);
        if squared > 0.0 {
            let offset = squared.sqrt();
            let z = self.rho - 1.0;
            points.push([offset, offset, z]);
            points.push([-offset, -offset, z]);
        }

        points
    }
}

impl VectorField<LorenzParams> for Lorenz {
    fn derivative(&self, state: &[f64], _t: f64, params: &LorenzParams) -> Vec<f64> {
        let &[x, y, z] = state else {
            return Vec::new();
        };
        let LorenzParams { sigma, beta, rho } = *params;

        vec![sigma * (y - x), x * (rho - z) - y, x * y - beta * z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use attractor_core::linspace;
    use attractor_solvers::transient::{dormand_prince::Config, integrate};

    #[test]
    fn derivative_at_unit_state() {
        let dx = Lorenz.derivative(&[1.0, 1.0, 1.0], 0.0, &LorenzParams::default());

        assert_relative_eq!(dx[0], 0.0);
        assert_relative_eq!(dx[1], 26.0);
        assert_relative_eq!(dx[2], 1.0 - 8.0 / 3.0);
    }

    #[test]
    fn equilibria_are_fixed_points() {
        let params = LorenzParams::default();
        let points = params.equilibria();

        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[1][0], 72.0_f64.sqrt());
        for point in points {
            for component in Lorenz.derivative(&point, 0.0, &params) {
                assert_abs_diff_eq!(component, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn only_origin_below_critical_rho() {
        let params = LorenzParams {
            rho: 0.5,
            ..LorenzParams::default()
        };
        assert_eq!(params.equilibria(), vec![[0.0; 3]]);
    }

    #[test]
    fn wrong_dimension_gives_empty_derivative() {
        assert!(Lorenz.derivative(&[1.0, 2.0], 0.0, &LorenzParams::default()).is_empty());
    }

    #[test]
    fn origin_attracts_below_critical_rho() {
        let params = LorenzParams {
            rho: 0.5,
            ..LorenzParams::default()
        };
        let times = linspace(0.0, 50.0, 101);

        let trajectory = integrate(&Lorenz, &[1.0, 1.0, 1.0], &times, &params, &Config::default())
            .expect("should integrate");

        let last = trajectory.last().expect("non-empty");
        assert!(last.iter().all(|v| v.abs() < 1e-6), "last = {last:?}");
    }
}
