use thiserror::Error;

/// How solution values are produced at grid points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Clip every step so it lands exactly on the next grid point.
    ///
    /// Grid values are full-accuracy step results. Dense grids cost at least
    /// one step per grid interval.
    #[default]
    StepToPoint,

    /// Step freely toward the final time and evaluate the fourth-order
    /// interpolant at any grid points a step passes over.
    ///
    /// Takes fewer steps on dense grids at a small cost in accuracy between
    /// step endpoints.
    Interpolate,
}

/// Configuration for the Dormand–Prince solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    abs_tol: f64,
    rel_tol: f64,
    max_steps: usize,
    max_step: f64,
    first_step: Option<f64>,
    sampling: Sampling,
}

/// Errors that can occur when validating a Dormand–Prince config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("abs_tol and rel_tol cannot both be zero")]
    ZeroTolerance,

    #[error("max_steps must be at least 1")]
    MaxSteps,

    #[error("max_step must be positive")]
    MaxStep,

    #[error("first_step must be positive and finite")]
    FirstStep,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-8, 1e-8).unwrap()
    }
}

impl Config {
    /// Default ceiling on attempted steps between consecutive grid points.
    pub const DEFAULT_MAX_STEPS: usize = 10_000;

    /// Creates a new config with validated tolerances.
    ///
    /// The local error of each accepted step is kept below
    /// `abs_tol + rel_tol * |x|` component-wise, in a root-mean-square sense.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite, or if
    /// both are zero.
    pub fn new(abs_tol: f64, rel_tol: f64) -> Result<Self, ConfigError> {
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }
        if abs_tol == 0.0 && rel_tol == 0.0 {
            return Err(ConfigError::ZeroTolerance);
        }

        Ok(Self {
            abs_tol,
            rel_tol,
            max_steps: Self::DEFAULT_MAX_STEPS,
            max_step: f64::INFINITY,
            first_step: None,
            sampling: Sampling::default(),
        })
    }

    /// Sets the ceiling on attempted steps between consecutive grid points.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_steps` is zero.
    pub fn with_max_steps(self, max_steps: usize) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::MaxSteps);
        }
        Ok(Self { max_steps, ..self })
    }

    /// Sets an upper bound on the absolute step size.
    ///
    /// # Errors
    ///
    /// Returns an error unless `max_step` is positive (infinity is allowed).
    pub fn with_max_step(self, max_step: f64) -> Result<Self, ConfigError> {
        if max_step.is_nan() || max_step <= 0.0 {
            return Err(ConfigError::MaxStep);
        }
        Ok(Self { max_step, ..self })
    }

    /// Sets the absolute size of the first step attempted.
    ///
    /// Without this, the solver estimates a first step from the field's
    /// behavior at the initial state.
    ///
    /// # Errors
    ///
    /// Returns an error unless `first_step` is positive and finite.
    pub fn with_first_step(self, first_step: f64) -> Result<Self, ConfigError> {
        if !first_step.is_finite() || first_step <= 0.0 {
            return Err(ConfigError::FirstStep);
        }
        Ok(Self {
            first_step: Some(first_step),
            ..self
        })
    }

    /// Sets how grid values are produced.
    #[must_use]
    pub fn with_sampling(self, sampling: Sampling) -> Self {
        Self { sampling, ..self }
    }

    /// Returns the absolute tolerance.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the relative tolerance.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the ceiling on attempted steps between grid points.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the upper bound on the absolute step size.
    #[must_use]
    pub fn max_step(&self) -> f64 {
        self.max_step
    }

    /// Returns the configured first step, if any.
    #[must_use]
    pub fn first_step(&self) -> Option<f64> {
        self.first_step
    }

    /// Returns the sampling mode.
    #[must_use]
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerances() {
        let config = Config::default();

        assert_eq!(config.abs_tol(), 1e-8);
        assert_eq!(config.rel_tol(), 1e-8);
        assert_eq!(config.max_steps(), Config::DEFAULT_MAX_STEPS);
        assert_eq!(config.max_step(), f64::INFINITY);
        assert_eq!(config.first_step(), None);
        assert_eq!(config.sampling(), Sampling::StepToPoint);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(-1.0, 1e-6), Err(ConfigError::AbsTol));
        assert_eq!(Config::new(1e-6, f64::NAN), Err(ConfigError::RelTol));
        assert_eq!(Config::new(0.0, 0.0), Err(ConfigError::ZeroTolerance));
        assert!(Config::new(0.0, 1e-6).is_ok());
    }

    #[test]
    fn builders_validate() {
        let config = Config::default();

        assert_eq!(config.with_max_steps(0), Err(ConfigError::MaxSteps));
        assert_eq!(config.with_max_step(0.0), Err(ConfigError::MaxStep));
        assert_eq!(config.with_first_step(f64::INFINITY), Err(ConfigError::FirstStep));

        let tuned = config
            .with_max_steps(50)
            .and_then(|c| c.with_max_step(0.1))
            .and_then(|c| c.with_first_step(1e-3))
            .expect("valid settings")
            .with_sampling(Sampling::Interpolate);

        assert_eq!(tuned.max_steps(), 50);
        assert_eq!(tuned.max_step(), 0.1);
        assert_eq!(tuned.first_step(), Some(1e-3));
        assert_eq!(tuned.sampling(), Sampling::Interpolate);
    }
}
