use thiserror::Error;

/// Errors that can occur when validating a time grid.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("time grid is empty")]
    Empty,

    #[error("time grid contains non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },

    #[error("time grid is not strictly monotonic at index {index}: {previous} then {value}")]
    NonMonotonic {
        index: usize,
        previous: f64,
        value: f64,
    },
}

/// The direction a time grid runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Returns `1.0` for forward grids and `-1.0` for backward grids.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// A validated sequence of sample times.
///
/// A grid is non-empty, contains only finite values, and is strictly
/// monotonic in either direction. Its first point is the initial time of any
/// integration performed over it.
///
/// A single-point grid is valid; its direction is reported as forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid<'a> {
    times: &'a [f64],
    direction: Direction,
}

impl<'a> TimeGrid<'a> {
    /// Validates `times` as a grid.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `times` is empty, contains a non-finite
    /// value, or is not strictly increasing or strictly decreasing.
    pub fn new(times: &'a [f64]) -> Result<Self, GridError> {
        let (&first, _) = times.split_first().ok_or(GridError::Empty)?;

        if let Some((index, &value)) = times.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            return Err(GridError::NonFinite { index, value });
        }

        let direction = match times.get(1) {
            Some(&second) if second < first => Direction::Backward,
            _ => Direction::Forward,
        };
        let sign = direction.sign();

        for (index, pair) in times.windows(2).enumerate() {
            if (pair[1] - pair[0]) * sign <= 0.0 {
                return Err(GridError::NonMonotonic {
                    index: index + 1,
                    previous: pair[0],
                    value: pair[1],
                });
            }
        }

        Ok(Self { times, direction })
    }

    /// Returns the sample times.
    #[must_use]
    pub fn times(&self) -> &'a [f64] {
        self.times
    }

    /// Returns the number of sample times.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; grids are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the initial time.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.times[0]
    }

    /// Returns the final time.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Returns the direction the grid runs in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the absolute length of the time span covered by the grid.
    #[must_use]
    pub fn span(&self) -> f64 {
        (self.end() - self.start()).abs()
    }
}

/// Returns `n` evenly spaced values from `start` to `stop`, inclusive.
///
/// Returns an empty vector for `n == 0` and `[start]` for `n == 1`. The last
/// value is exactly `stop`.
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (stop - start) / (n - 1) as f64;
            #[allow(clippy::cast_precision_loss)]
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = stop;
            values
        }
    }
}
