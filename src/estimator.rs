//! Stateful heading estimator fed by independent sensor event streams

use crate::heading::{Heading, compute_heading};
use crate::rotation::{orientation, rotation_matrix};
use crate::types::{HeadingError, Orientation};
use nalgebra::Vector3;

/// Heading estimator caching the most recent reading per sensor
///
/// Accelerometer and magnetometer events arrive on independent streams at
/// sensor-driven rates; each update overwrites only its own vector. A
/// computation uses whatever the other vector currently holds, stale by at
/// most one event interval. No history is retained.
///
/// Until both sensors have delivered at least once, [`heading`](Self::heading)
/// and [`orientation`](Self::orientation) report
/// [`HeadingError::AwaitingSamples`] — the angles are undefined before that
/// and are never computed from zero vectors.
///
/// The estimator is a plain owned value with no interior mutability. Callers
/// delivering events from multiple threads wrap it in their own lock;
/// single-threaded callback dispatch needs nothing.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_heading::{HeadingError, HeadingEstimator};
///
/// let mut estimator = HeadingEstimator::new();
/// assert_eq!(estimator.heading(), Err(HeadingError::AwaitingSamples));
///
/// estimator.update_accelerometer(Vector3::new(0.0, 0.0, 9.81));
/// assert_eq!(estimator.heading(), Err(HeadingError::AwaitingSamples));
///
/// estimator.update_magnetometer(Vector3::new(0.0, 50.0, 0.0));
/// assert_eq!(estimator.heading().unwrap().degrees, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HeadingEstimator {
    /// Latest accelerometer reading
    accelerometer: Vector3<f32>,
    /// Latest magnetometer reading
    magnetometer: Vector3<f32>,
    /// Whether the accelerometer has delivered at least once
    accelerometer_seen: bool,
    /// Whether the magnetometer has delivered at least once
    magnetometer_seen: bool,
}

impl HeadingEstimator {
    /// Create an estimator with no sensor data yet
    pub fn new() -> Self {
        Self {
            accelerometer: Vector3::zeros(),
            magnetometer: Vector3::zeros(),
            accelerometer_seen: false,
            magnetometer_seen: false,
        }
    }

    /// Record a new accelerometer reading, replacing the previous one
    pub fn update_accelerometer(&mut self, reading: Vector3<f32>) {
        self.accelerometer = reading;
        self.accelerometer_seen = true;
    }

    /// Record a new magnetometer reading, replacing the previous one
    pub fn update_magnetometer(&mut self, reading: Vector3<f32>) {
        self.magnetometer = reading;
        self.magnetometer_seen = true;
    }

    /// Compute the heading from the current vector pair
    ///
    /// # Errors
    /// - [`HeadingError::AwaitingSamples`] until both sensors have delivered
    /// - [`HeadingError::DegenerateInput`] when the cached readings admit no
    ///   valid rotation matrix
    pub fn heading(&self) -> Result<Heading, HeadingError> {
        let (accelerometer, magnetometer) = self.samples()?;
        compute_heading(accelerometer, magnetometer)
    }

    /// Compute the full orientation triple from the current vector pair
    ///
    /// Same availability rules as [`heading`](Self::heading).
    pub fn orientation(&self) -> Result<Orientation, HeadingError> {
        let (accelerometer, magnetometer) = self.samples()?;
        let rotation = rotation_matrix(accelerometer, magnetometer)?;
        Ok(orientation(&rotation))
    }

    /// Whether both sensors have delivered at least one reading
    pub fn is_populated(&self) -> bool {
        self.accelerometer_seen && self.magnetometer_seen
    }

    /// Discard all sensor data, returning to the unseen state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn samples(&self) -> Result<(Vector3<f32>, Vector3<f32>), HeadingError> {
        if !self.is_populated() {
            return Err(HeadingError::AwaitingSamples);
        }
        Ok((self.accelerometer, self.magnetometer))
    }
}

impl Default for HeadingEstimator {
    fn default() -> Self {
        Self::new()
    }
}
