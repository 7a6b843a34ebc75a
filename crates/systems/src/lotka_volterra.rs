use attractor_core::VectorField;

/// Lotka–Volterra predator–prey dynamics.
///
/// ```text
/// dx/dt = x (α − β y)
/// dy/dt = y (δ x − γ)
/// ```
///
/// With every coefficient equal to 1 (the default) this is
/// `dx/dt = x (1 − y)`, `dy/dt = y (x − 1)`. The field is evaluated with `()`
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LotkaVolterra {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
}

/// A straight line in the plane along which one component of the field vanishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Nullcline {
    /// The line `x = value`.
    Vertical(f64),
    /// The line `y = value`.
    Horizontal(f64),
}

/// The nullclines of a [`LotkaVolterra`] system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nullclines {
    /// Lines on which `dx/dt = 0`.
    pub x: [Nullcline; 2],

    /// Lines on which `dy/dt = 0`.
    pub y: [Nullcline; 2],
}

impl Default for LotkaVolterra {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            gamma: 1.0,
            delta: 1.0,
        }
    }
}

impl LotkaVolterra {
    /// Returns the nullclines `x = 0`, `y = α/β` and `y = 0`, `x = γ/δ`.
    #[must_use]
    pub fn nullclines(&self) -> Nullclines {
        Nullclines {
            x: [
                Nullcline::Vertical(0.0),
                Nullcline::Horizontal(self.alpha / self.beta),
            ],
            y: [
                Nullcline::Horizontal(0.0),
                Nullcline::Vertical(self.gamma / self.delta),
            ],
        }
    }

    /// Returns the extinction equilibrium at the origin and the coexistence
    /// equilibrium at `(γ/δ, α/β)`.
    #[must_use]
    pub fn equilibria(&self) -> [[f64; 2]; 2] {
        [
            [0.0, 0.0],
            [self.gamma / self.delta, self.alpha / self.beta],
        ]
    }

    /// Returns the conserved quantity `δx − γ ln x + βy − α ln y`.
    ///
    /// It is constant along every trajectory in the positive quadrant, which
    /// is why those trajectories are closed orbits.
    #[must_use]
    pub fn first_integral(&self, state: [f64; 2]) -> f64 {
        let [x, y] = state;
        self.delta * x - self.gamma * x.ln() + self.beta * y - self.alpha * y.ln()
    }
}

impl VectorField<()> for LotkaVolterra {
    fn derivative(&self, state: &[f64], _t: f64, _params: &()) -> Vec<f64> {
        let &[x, y] = state else {
            return Vec::new();
        };
        vec![
            x * (self.alpha - self.beta * y),
            y * (self.delta * x - self.gamma),
        ]
    }
}
