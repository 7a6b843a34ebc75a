use attractor_core::VectorField;

/// A planar linear system `dx/dt = A x` with `A = [[a, b], [c, d]]`.
///
/// The coefficients are part of the field, so it is evaluated with `()`
/// parameters. A state of any dimension other than 2 yields an empty
/// derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Linear2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Classification of the equilibrium at the origin of a [`Linear2`] system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equilibrium {
    /// Real eigenvalues of opposite sign (a hyperbolic point).
    Saddle,
    StableNode,
    UnstableNode,
    StableSpiral,
    UnstableSpiral,
    /// Purely imaginary eigenvalues.
    Center,
    /// At least one zero eigenvalue; the origin is not isolated.
    Degenerate,
}

impl Linear2 {
    /// Creates the system with matrix `[[a, b], [c, d]]`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// `dx/dt = 2x`, `dy/dt = −y`: a saddle at the origin.
    #[must_use]
    pub fn saddle() -> Self {
        Self::new(2.0, 0.0, 0.0, -1.0)
    }

    /// `dx/dt = −x`, `dy/dt = −y`: every trajectory decays to the origin.
    #[must_use]
    pub fn sink() -> Self {
        Self::new(-1.0, 0.0, 0.0, -1.0)
    }

    #[must_use]
    pub fn trace(&self) -> f64 {
        self.a + self.d
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Returns both eigenvalues as `(re, im)` pairs, larger real part first.
    #[must_use]
    pub fn eigenvalues(&self) -> [(f64, f64); 2] {
        let half_trace = self.trace() / 2.0;
        let discriminant = half_trace * half_trace - self.determinant();

        if discriminant >= 0.0 {
            let root = discriminant.sqrt();
            [(half_trace + root, 0.0), (half_trace - root, 0.0)]
        } else {
            let root = (-discriminant).sqrt();
            [(half_trace, root), (half_trace, -root)]
        }
    }

    /// Classifies the origin from the trace and determinant of the matrix.
    #[must_use]
    pub fn classify(&self) -> Equilibrium {
        let trace = self.trace();
        let det = self.determinant();

        if det < 0.0 {
            return Equilibrium::Saddle;
        }
        if det == 0.0 {
            return Equilibrium::Degenerate;
        }
        if trace == 0.0 {
            return Equilibrium::Center;
        }

        let spiral = trace * trace < 4.0 * det;
        match (spiral, trace < 0.0) {
            (false, true) => Equilibrium::StableNode,
            (false, false) => Equilibrium::UnstableNode,
            (true, true) => Equilibrium::StableSpiral,
            (true, false) => Equilibrium::UnstableSpiral,
        }
    }
}

impl VectorField<()> for Linear2 {
    fn derivative(&self, state: &[f64], _t: f64, _params: &()) -> Vec<f64> {
        let &[x, y] = state else {
            return Vec::new();
        };
        vec![self.a * x + self.b * y, self.c * x + self.d * y]
    }
}
