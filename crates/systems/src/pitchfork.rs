use attractor_core::VectorField;

/// The supercritical pitchfork normal form `dx/dt = r x − x³`.
///
/// The parameter `r` is passed on each evaluation, so one field value serves
/// a whole sweep through the bifurcation at `r = 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pitchfork;

/// Linear stability of an equilibrium of a one-dimensional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stability {
    Stable,
    Unstable,
    /// The derivative of the field vanishes; linearization is inconclusive.
    NonHyperbolic,
}

/// Which branch of the pitchfork an equilibrium lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    /// `x = 0`, present for every `r`.
    Trivial,
    /// `x = +√r`, present for `r ≥ 0`.
    Upper,
    /// `x = −√r`, present for `r ≥ 0`.
    Lower,
}

/// An equilibrium of the pitchfork at a given parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BifurcationPoint {
    pub r: f64,
    pub x: f64,
    pub branch: Branch,
    pub stability: Stability,
}

impl Pitchfork {
    /// Returns the equilibria at `r`, trivial branch first.
    ///
    /// For `r > 0` the nontrivial branches `±√r` are stable and the origin is
    /// unstable. At `r = 0` the three branches coincide in a single
    /// non-hyperbolic point.
    #[must_use]
    pub fn equilibria(r: f64) -> Vec<BifurcationPoint> {
        let point = |x: f64, branch| BifurcationPoint {
            r,
            x,
            branch,
            stability: stability(r - 3.0 * x * x),
        };

        let mut points = vec![point(0.0, Branch::Trivial)];
        if r > 0.0 {
            let root = r.sqrt();
            points.push(point(root, Branch::Upper));
            points.push(point(-root, Branch::Lower));
        }
        points
    }

    /// Returns every equilibrium for each of `r_values`, in order.
    #[must_use]
    pub fn bifurcation_diagram(r_values: &[f64]) -> Vec<BifurcationPoint> {
        r_values.iter().flat_map(|&r| Self::equilibria(r)).collect()
    }
}

fn stability(slope: f64) -> Stability {
    if slope < 0.0 {
        Stability::Stable
    } else if slope > 0.0 {
        Stability::Unstable
    } else {
        Stability::NonHyperbolic
    }
}

impl VectorField<f64> for Pitchfork {
    fn derivative(&self, state: &[f64], _t: f64, r: &f64) -> Vec<f64> {
        state.iter().map(|x| r * x - x * x * x).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use attractor_core::linspace;
    use attractor_solvers::transient::{dormand_prince::Config, integrate};

    #[test]
    fn equilibria_below_and_above_bifurcation() {
        let below = Pitchfork::equilibria(-1.0);
        assert_eq!(below.len(), 1);
        assert_eq!(below[0].stability, Stability::Stable);

        let at = Pitchfork::equilibria(0.0);
        assert_eq!(at.len(), 1);
        assert_eq!(at[0].stability, Stability::NonHyperbolic);

        let above = Pitchfork::equilibria(4.0);
        let branches: Vec<_> = above.iter().map(|p| (p.branch, p.x, p.stability)).collect();
        assert_eq!(
            branches,
            vec![
                (Branch::Trivial, 0.0, Stability::Unstable),
                (Branch::Upper, 2.0, Stability::Stable),
                (Branch::Lower, -2.0, Stability::Stable),
            ]
        );
    }

    #[test]
    fn diagram_collects_every_branch() {
        let r_values = linspace(-1.0, 2.0, 400);
        let diagram = Pitchfork::bifurcation_diagram(&r_values);

        let nontrivial = diagram
            .iter()
            .filter(|p| p.branch != Branch::Trivial)
            .count();
        let positive = r_values.iter().filter(|&&r| r > 0.0).count();
        assert_eq!(nontrivial, 2 * positive);
        assert_eq!(diagram.len(), r_values.len() + 2 * positive);
    }

    #[test]
    fn trajectories_settle_on_stable_branch() {
        let times = linspace(0.0, 20.0, 41);

        for (initial, expected) in [(0.1, 1.5), (-3.0, -1.5)] {
            let trajectory = integrate(&Pitchfork, &[initial], &times, &2.25, &Config::default())
                .expect("should integrate");
            assert_abs_diff_eq!(trajectory.last().unwrap()[0], expected, epsilon = 1e-6);
        }
    }
}
