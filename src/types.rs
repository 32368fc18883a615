//! Core types shared across the heading pipeline

/// Device orientation angles in radians
///
/// Derived from the rotation matrix on every computation; not retained
/// between updates. Only meaningful once both the accelerometer and the
/// magnetometer have delivered at least one reading.
///
/// # Angle conventions
/// - **azimuth**: rotation about the vertical axis, clockwise positive,
///   range (−π, π], 0 = magnetic north
/// - **pitch**: rotation about the lateral axis, range [−π/2, π/2]
/// - **roll**: rotation about the longitudinal axis, range (−π, π]
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_heading::{orientation, rotation_matrix};
///
/// let accel = Vector3::new(0.0, 0.0, 9.81);
/// let magnet = Vector3::new(0.0, 50.0, 0.0);
///
/// let angles = orientation(&rotation_matrix(accel, magnet).unwrap());
/// assert!(angles.azimuth.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Angle to magnetic north in radians, clockwise positive
    pub azimuth: f32,
    /// Nose-up/nose-down angle in radians
    pub pitch: f32,
    /// Side-to-side tilt angle in radians
    pub roll: f32,
}

impl Orientation {
    /// Convert all three angles to degrees
    pub fn to_degrees(self) -> Orientation {
        Orientation {
            azimuth: self.azimuth.to_degrees(),
            pitch: self.pitch.to_degrees(),
            roll: self.roll.to_degrees(),
        }
    }
}

/// Reasons a heading cannot be produced
///
/// Every fallible operation in this crate returns one of these instead of
/// panicking or reporting a fabricated bearing.
///
/// # Example
/// ```
/// use compass_heading::{HeadingError, HeadingEstimator};
///
/// let estimator = HeadingEstimator::new();
///
/// // No sensor data yet
/// assert_eq!(estimator.heading(), Err(HeadingError::AwaitingSamples));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingError {
    /// One or both sensors have not delivered a reading yet
    AwaitingSamples,
    /// No valid rotation matrix exists for the current readings
    ///
    /// Raised when either vector is (near) zero-length or the gravity and
    /// geomagnetic vectors are (near) parallel, as in free fall or at a
    /// magnetic pole.
    DegenerateInput,
}

impl core::fmt::Display for HeadingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HeadingError::AwaitingSamples => {
                write!(f, "heading unavailable: awaiting sensor samples")
            }
            HeadingError::DegenerateInput => {
                write!(f, "heading unavailable: degenerate sensor input")
            }
        }
    }
}

impl core::error::Error for HeadingError {}
