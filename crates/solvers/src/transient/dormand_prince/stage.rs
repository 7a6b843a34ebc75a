use attractor_core::VectorField;

use crate::transient::{InputError, input::Rhs};

use super::{
    step_size::{error_scale, scaled_rms},
    tableau::{A, B, C, E, STAGES},
};

/// The outcome of one attempted step, accepted or not.
pub(super) struct Attempt {
    /// State at `t + h`.
    pub y: Vec<f64>,

    /// Stage derivatives; the last stage is the derivative at `(t + h, y)`.
    pub k: [Vec<f64>; STAGES],

    /// Scaled error norm; the step is acceptable when this is at most 1.
    pub error: f64,
}

impl Attempt {
    /// The derivative at the end of the step, reused as the next first stage.
    pub fn derivative(&self) -> &[f64] {
        &self.k[STAGES - 1]
    }
}

/// Takes one Dormand–Prince step of signed size `h` from `(t, y)`.
///
/// `f` must be the derivative at `(t, y)`.
pub(super) fn attempt<F, P>(
    rhs: &mut Rhs<'_, F, P>,
    t: f64,
    y: &[f64],
    f: &[f64],
    h: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<Attempt, InputError>
where
    F: VectorField<P> + ?Sized,
    P: ?Sized,
{
    let mut k: [Vec<f64>; STAGES] = Default::default();
    k[0] = f.to_vec();

    for stage in 1..C.len() {
        let y_stage = combine(y, h, A[stage], &k);
        k[stage] = rhs.eval(t + C[stage] * h, &y_stage)?;
    }

    let y_new = combine(y, h, &B, &k);
    k[STAGES - 1] = rhs.eval(t + h, &y_new)?;

    let error_estimate: Vec<f64> = (0..y.len())
        .map(|i| h * E.iter().zip(&k).map(|(e, ks)| e * ks[i]).sum::<f64>())
        .collect();
    let scale = error_scale(y, &y_new, abs_tol, rel_tol);

    Ok(Attempt {
        error: scaled_rms(&error_estimate, &scale),
        y: y_new,
        k,
    })
}

/// Returns `y + h * sum(weights[j] * k[j])`.
fn combine(y: &[f64], h: f64, weights: &[f64], k: &[Vec<f64>]) -> Vec<f64> {
    y.iter()
        .enumerate()
        .map(|(i, yi)| {
            let slope: f64 = weights.iter().zip(k).map(|(w, kj)| w * kj[i]).sum();
            yi + h * slope
        })
        .collect()
}
