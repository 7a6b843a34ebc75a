//! Error norms and step size selection.

use attractor_core::VectorField;

use crate::transient::{InputError, input::Rhs};

pub(super) const SAFETY: f64 = 0.9;
pub(super) const MIN_FACTOR: f64 = 0.2;
pub(super) const MAX_FACTOR: f64 = 10.0;

/// Order of the embedded error estimator.
const ERROR_ORDER: f64 = 4.0;

/// Root-mean-square of `values[i] / scale[i]`.
pub(super) fn scaled_rms(values: &[f64], scale: &[f64]) -> f64 {
    let sum: f64 = values
        .iter()
        .zip(scale)
        .map(|(v, s)| (v / s).powi(2))
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    (sum / n).sqrt()
}

/// Per-component error scale `abs_tol + rel_tol * max(|a|, |b|)`.
pub(super) fn error_scale(a: &[f64], b: &[f64], abs_tol: f64, rel_tol: f64) -> Vec<f64> {
    a.iter()
        .zip(b)
        .map(|(x, y)| abs_tol + rel_tol * x.abs().max(y.abs()))
        .collect()
}

/// Multiplier applied to the step size after an accepted step.
pub(super) fn grow_factor(error: f64, after_rejection: bool) -> f64 {
    let factor = if error == 0.0 {
        MAX_FACTOR
    } else {
        (SAFETY * error.powf(-1.0 / (ERROR_ORDER + 1.0))).min(MAX_FACTOR)
    };
    if after_rejection {
        factor.min(1.0)
    } else {
        factor
    }
}

/// Multiplier applied to the step size after a rejected step.
///
/// Always at most one half. A NaN error norm shrinks by the minimum factor.
pub(super) fn shrink_factor(error: f64) -> f64 {
    (SAFETY * error.powf(-1.0 / (ERROR_ORDER + 1.0)))
        .max(MIN_FACTOR)
        .min(0.5)
}

/// Smallest step allowed at time `t`, ten units of floating-point spacing.
pub(super) fn min_step(t: f64) -> f64 {
    10.0 * (t.abs() * f64::EPSILON).max(f64::MIN_POSITIVE)
}

/// Estimates a first step size from the field's behavior at the initial state.
///
/// Uses the derivative magnitude relative to the error scale, refined with one
/// explicit Euler probe, as in Hairer, Nørsett & Wanner.
#[allow(clippy::too_many_arguments)]
pub(super) fn initial_step<F, P>(
    rhs: &mut Rhs<'_, F, P>,
    t0: f64,
    y0: &[f64],
    f0: &[f64],
    sign: f64,
    span: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<f64, InputError>
where
    F: VectorField<P> + ?Sized,
    P: ?Sized,
{
    if span == 0.0 {
        return Ok(0.0);
    }

    let scale: Vec<f64> = y0.iter().map(|y| abs_tol + y.abs() * rel_tol).collect();
    let d0 = scaled_rms(y0, &scale);
    let d1 = scaled_rms(f0, &scale);

    let h0 = if d0 < 1e-5 || d1 < 1e-5 {
        1e-6
    } else {
        0.01 * d0 / d1
    }
    .min(span);

    let y1: Vec<f64> = y0
        .iter()
        .zip(f0)
        .map(|(y, f)| y + h0 * sign * f)
        .collect();
    let f1 = rhs.eval(t0 + h0 * sign, &y1)?;
    let diff: Vec<f64> = f1.iter().zip(f0).map(|(a, b)| a - b).collect();
    let d2 = scaled_rms(&diff, &scale) / h0;

    let h1 = if d1 <= 1e-15 && d2 <= 1e-15 {
        (h0 * 1e-3).max(1e-6)
    } else {
        (0.01 / d1.max(d2)).powf(1.0 / (ERROR_ORDER + 1.0))
    };

    Ok((100.0 * h0).min(h1).min(span))
}
