use thiserror::Error;

/// Errors that can occur when assembling a trajectory from raw parts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryError {
    #[error("trajectory dimension must be positive")]
    ZeroDimension,

    #[error("expected {expected} state values for {samples} samples, found {found}")]
    ShapeMismatch {
        samples: usize,
        dimension: usize,
        expected: usize,
        found: usize,
    },
}

/// States sampled at a sequence of times.
///
/// A trajectory stores one state per sample time, all of the same dimension.
/// Rows are stored contiguously, so `state(i)` is a cheap slice and
/// `column(j)` gathers one coordinate across every sample (the shape plotting
/// code wants for an x, y, or z axis).
///
/// Trajectories are built by solvers and handed to the caller by value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTrajectory")
)]
pub struct Trajectory {
    dimension: usize,
    times: Vec<f64>,
    states: Vec<f64>,
}

impl Trajectory {
    /// Creates an empty trajectory for states of the given dimension.
    #[must_use]
    pub fn with_capacity(dimension: usize, samples: usize) -> Self {
        Self {
            dimension,
            times: Vec::with_capacity(samples),
            states: Vec::with_capacity(samples * dimension),
        }
    }

    /// Builds a trajectory from its sample times and row-major states.
    ///
    /// # Errors
    ///
    /// Returns an error if `dimension` is zero or `states` does not hold
    /// exactly `dimension` values per sample time.
    pub fn from_parts(
        dimension: usize,
        times: Vec<f64>,
        states: Vec<f64>,
    ) -> Result<Self, TrajectoryError> {
        if dimension == 0 {
            return Err(TrajectoryError::ZeroDimension);
        }
        let expected = times.len().checked_mul(dimension);
        if expected != Some(states.len()) {
            return Err(TrajectoryError::ShapeMismatch {
                samples: times.len(),
                dimension,
                expected: expected.unwrap_or(usize::MAX),
                found: states.len(),
            });
        }
        Ok(Self {
            dimension,
            times,
            states,
        })
    }

    /// Appends a sample.
    ///
    /// # Panics
    ///
    /// Panics if `state` does not match the trajectory's dimension.
    pub fn push(&mut self, t: f64, state: &[f64]) {
        assert_eq!(
            state.len(),
            self.dimension,
            "state dimension must match trajectory dimension"
        );
        self.times.push(t);
        self.states.extend_from_slice(state);
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the trajectory holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the dimension of each state.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the sample times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the state at sample `index`, if present.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.dimension)?;
        self.states.get(start..start + self.dimension)
    }

    /// Returns the first state, if any.
    #[must_use]
    pub fn first(&self) -> Option<&[f64]> {
        self.state(0)
    }

    /// Returns the last state, if any.
    #[must_use]
    pub fn last(&self) -> Option<&[f64]> {
        self.len().checked_sub(1).and_then(|i| self.state(i))
    }

    /// Iterates over `(t, state)` pairs in sample order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, &[f64])> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.states.chunks_exact(self.dimension.max(1)))
    }

    /// Returns coordinate `axis` of every state, in sample order.
    ///
    /// Returns `None` if `axis` is out of range.
    #[must_use]
    pub fn column(&self, axis: usize) -> Option<Vec<f64>> {
        (axis < self.dimension).then(|| {
            self.states
                .iter()
                .skip(axis)
                .step_by(self.dimension)
                .copied()
                .collect()
        })
    }

    /// Returns `true` if every stored value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.states.iter().all(|v| v.is_finite())
    }

    /// Consumes the trajectory, returning the times and one vector per state.
    #[must_use]
    pub fn into_rows(self) -> (Vec<f64>, Vec<Vec<f64>>) {
        let rows = self
            .states
            .chunks_exact(self.dimension.max(1))
            .map(<[f64]>::to_vec)
            .collect();
        (self.times, rows)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTrajectory {
    dimension: usize,
    times: Vec<f64>,
    states: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTrajectory> for Trajectory {
    type Error = TrajectoryError;

    fn try_from(raw: RawTrajectory) -> Result<Self, Self::Error> {
        Self::from_parts(raw.dimension, raw.times, raw.states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        let mut trajectory = Trajectory::with_capacity(3, 3);
        trajectory.push(0.0, &[1.0, 2.0, 3.0]);
        trajectory.push(0.5, &[4.0, 5.0, 6.0]);
        trajectory.push(1.0, &[7.0, 8.0, 9.0]);
        trajectory
    }

    #[test]
    fn indexes_states_by_sample() {
        let trajectory = sample();

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.dimension(), 3);
        assert_eq!(trajectory.first(), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(trajectory.state(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(trajectory.last(), Some(&[7.0, 8.0, 9.0][..]));
        assert_eq!(trajectory.state(3), None);
    }

    #[test]
    fn columns_gather_one_axis() {
        let trajectory = sample();

        assert_eq!(trajectory.column(0), Some(vec![1.0, 4.0, 7.0]));
        assert_eq!(trajectory.column(2), Some(vec![3.0, 6.0, 9.0]));
        assert_eq!(trajectory.column(3), None);
    }

    #[test]
    fn iter_pairs_times_with_states() {
        let trajectory = sample();
        let times: Vec<f64> = trajectory.iter().map(|(t, _)| t).collect();
        let sums: Vec<f64> = trajectory.iter().map(|(_, x)| x.iter().sum()).collect();

        assert_eq!(times, vec![0.0, 0.5, 1.0]);
        assert_eq!(sums, vec![6.0, 15.0, 24.0]);
    }

    #[test]
    fn into_rows_splits_states() {
        let (times, rows) = sample().into_rows();

        assert_eq!(times, vec![0.0, 0.5, 1.0]);
        assert_eq!(rows[1], vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn empty_trajectory_has_no_endpoints() {
        let trajectory = Trajectory::with_capacity(2, 0);

        assert!(trajectory.is_empty());
        assert_eq!(trajectory.first(), None);
        assert_eq!(trajectory.last(), None);
    }

    #[test]
    fn detects_non_finite_values() {
        let mut trajectory = sample();
        assert!(trajectory.is_finite());

        trajectory.push(1.5, &[f64::INFINITY, 0.0, 0.0]);
        assert!(!trajectory.is_finite());
    }

    #[test]
    #[should_panic(expected = "state dimension")]
    fn push_rejects_wrong_dimension() {
        sample().push(2.0, &[1.0]);
    }

    #[test]
    fn from_parts_checks_shape() {
        let trajectory = Trajectory::from_parts(2, vec![0.0, 1.0], vec![1.0, 2.0, 3.0, 4.0])
            .expect("shape is consistent");
        assert_eq!(trajectory.last(), Some(&[3.0, 4.0][..]));

        assert_eq!(
            Trajectory::from_parts(2, vec![0.0, 1.0, 2.0], vec![1.0]),
            Err(TrajectoryError::ShapeMismatch {
                samples: 3,
                dimension: 2,
                expected: 6,
                found: 1,
            })
        );
        assert_eq!(
            Trajectory::from_parts(0, vec![0.0], Vec::new()),
            Err(TrajectoryError::ZeroDimension)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_malformed_shapes() {
        let short = r#"{"dimension":2,"times":[0.0,1.0,2.0],"states":[1.0]}"#;
        let flat = r#"{"dimension":0,"times":[0.0],"states":[]}"#;

        assert!(serde_json::from_str::<Trajectory>(short).is_err());
        assert!(serde_json::from_str::<Trajectory>(flat).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_round_trip() {
        let trajectory = sample();
        let json = serde_json::to_string(&trajectory).expect("should serialize");
        let back: Trajectory = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, trajectory);
    }
}
