use super::tableau::{P, STAGES};

/// Fourth-order continuous extension of an accepted step.
///
/// Evaluates the state anywhere in `[t_old, t_old + h]` from the step's stage
/// derivatives without further field evaluations.
pub(super) struct Interpolant<'a> {
    t_old: f64,
    h: f64,
    y_old: &'a [f64],
    /// `q[i][j]`: coefficient of `x^(j+1)` for component `i`.
    q: Vec<[f64; 4]>,
}

impl<'a> Interpolant<'a> {
    pub(super) fn new(t_old: f64, h: f64, y_old: &'a [f64], k: &[Vec<f64>; STAGES]) -> Self {
        let q = (0..y_old.len())
            .map(|i| {
                let mut row = [0.0; 4];
                for (stage, weights) in k.iter().zip(P) {
                    for (q, w) in row.iter_mut().zip(weights) {
                        *q += stage[i] * w;
                    }
                }
                row
            })
            .collect();

        Self { t_old, h, y_old, q }
    }

    /// Returns the interpolated state at `t`.
    pub(super) fn eval(&self, t: f64) -> Vec<f64> {
        let x = (t - self.t_old) / self.h;
        let powers = [x, x * x, x * x * x, x * x * x * x];

        self.y_old
            .iter()
            .zip(&self.q)
            .map(|(y, row)| {
                let poly: f64 = row.iter().zip(powers).map(|(q, p)| q * p).sum();
                y + self.h * poly
            })
            .collect()
    }
}
