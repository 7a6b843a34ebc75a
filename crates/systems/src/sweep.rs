use thiserror::Error;

use crate::LorenzParams;

/// A repeating schedule of parameter values, one per animation frame.
///
/// Frame `n` maps to `start + (n mod period) · increment`, so the value ramps
/// up by `increment` each frame and wraps back to `start` after `period`
/// frames.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSweep {
    start: f64,
    increment: f64,
    period: usize,
}

/// Errors that can occur when building a [`ParameterSweep`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SweepError {
    #[error("start and increment must be finite")]
    NonFinite,

    #[error("period must be at least 1")]
    ZeroPeriod,
}

impl ParameterSweep {
    /// Creates a schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` or `increment` is not finite, or if
    /// `period` is zero.
    pub fn new(start: f64, increment: f64, period: usize) -> Result<Self, SweepError> {
        if !start.is_finite() || !increment.is_finite() {
            return Err(SweepError::NonFinite);
        }
        if period == 0 {
            return Err(SweepError::ZeroPeriod);
        }
        Ok(Self {
            start,
            increment,
            period,
        })
    }

    /// σ from 0.1 to 20 in steps of 0.02.
    #[must_use]
    pub fn lorenz_sigma() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 0.02, 996).unwrap()
    }

    /// β from 0.1 to 10 in steps of 0.02.
    #[must_use]
    pub fn lorenz_beta() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 0.02, 496).unwrap()
    }

    /// ρ from 0.1 to 50.05 in steps of 0.05.
    #[must_use]
    pub fn lorenz_rho() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 0.05, 1000).unwrap()
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    #[must_use]
    pub fn period(&self) -> usize {
        self.period
    }

    /// Returns the value for `frame`.
    #[must_use]
    pub fn value(&self, frame: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let offset = (frame % self.period) as f64;
        self.start + offset * self.increment
    }

    /// Returns the values for frames `0..frames`.
    pub fn values(&self, frames: usize) -> impl Iterator<Item = f64> + '_ {
        (0..frames).map(|frame| self.value(frame))
    }
}

/// One of the three [`LorenzParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LorenzParam {
    Sigma,
    Beta,
    Rho,
}

/// Varies one Lorenz parameter frame by frame, holding the others fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LorenzSweep {
    pub base: LorenzParams,
    pub param: LorenzParam,
    pub schedule: ParameterSweep,
}

impl LorenzSweep {
    /// Sweeps `param` over its standard schedule from the default parameters.
    #[must_use]
    pub fn standard(param: LorenzParam) -> Self {
        let schedule = match param {
            LorenzParam::Sigma => ParameterSweep::lorenz_sigma(),
            LorenzParam::Beta => ParameterSweep::lorenz_beta(),
            LorenzParam::Rho => ParameterSweep::lorenz_rho(),
        };
        Self {
            base: LorenzParams::default(),
            param,
            schedule,
        }
    }

    /// Returns the parameters for `frame`.
    #[must_use]
    pub fn params(&self, frame: usize) -> LorenzParams {
        let value = self.schedule.value(frame);
        let mut params = self.base;
        match self.param {
            LorenzParam::Sigma => params.sigma = value,
            LorenzParam::Beta => params.beta = value,
            LorenzParam::Rho => params.rho = value,
        }
        params
    }

    /// Returns the parameters for frames `0..frames`, ready for a batch sweep.
    #[must_use]
    pub fn frames(&self, frames: usize) -> Vec<LorenzParams> {
        (0..frames).map(|frame| self.params(frame)).collect()
    }
}
