//! Compass heading computation from raw sensor vectors

use crate::cardinal::Cardinal;
use crate::math::RAD_TO_DEG;
use crate::rotation::{orientation, rotation_matrix};
use crate::types::HeadingError;
use nalgebra::Vector3;

/// A compass bearing in whole degrees with its cardinal label
///
/// `degrees` is always in `[0, 360)`. Both fields are public so callers can
/// format freely; the `Display` impl renders the conventional
/// `"150° (SE)"` form.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_heading::compute_heading;
///
/// let accel = Vector3::new(0.0, 0.0, 9.81);
/// let magnet = Vector3::new(50.0, 0.0, 0.0);
///
/// let heading = compute_heading(accel, magnet).unwrap();
/// assert_eq!(heading.degrees, 90);
/// assert_eq!(heading.cardinal.as_str(), "E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    /// Bearing in degrees, clockwise from magnetic north, `[0, 360)`
    pub degrees: u16,
    /// The 45° sector containing `degrees`
    pub cardinal: Cardinal,
}

impl Heading {
    /// Build a heading from a signed azimuth in degrees
    ///
    /// The azimuth is rounded to the nearest whole degree with ties away
    /// from zero (`f32::round`); negative results are normalized by adding
    /// 360. Accepts the full (−180°, 180°] azimuth range.
    pub fn from_azimuth_degrees(azimuth: f32) -> Heading {
        let mut degrees = azimuth.round() as i32;
        if degrees < 0 {
            degrees += 360;
        }

        let degrees = degrees as u16;
        Heading {
            degrees,
            cardinal: Cardinal::from_degrees(degrees),
        }
    }
}

impl core::fmt::Display for Heading {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}° ({})", self.degrees, self.cardinal)
    }
}

/// Compute the compass heading for a pair of raw sensor vectors
///
/// The full pipeline: derive the rotation matrix from the gravity and
/// geomagnetic vectors, extract the azimuth, round to whole degrees, and
/// normalize into `[0, 360)` with the matching cardinal sector.
///
/// Pure function of its two arguments — no internal state, no side effects,
/// identical inputs always produce identical output.
///
/// # Errors
/// [`HeadingError::DegenerateInput`] when no valid rotation matrix can be
/// formed; see [`rotation_matrix`].
pub fn compute_heading(
    accelerometer: Vector3<f32>,
    magnetometer: Vector3<f32>,
) -> Result<Heading, HeadingError> {
    let rotation = rotation_matrix(accelerometer, magnetometer)?;
    let azimuth = orientation(&rotation).azimuth;
    Ok(Heading::from_azimuth_degrees(azimuth * RAD_TO_DEG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_to_nearest() {
        assert_eq!(Heading::from_azimuth_degrees(44.9).degrees, 45);
        assert_eq!(Heading::from_azimuth_degrees(44.4).degrees, 44);
        assert_eq!(Heading::from_azimuth_degrees(0.2).degrees, 0);
    }

    #[test]
    fn test_rounding_ties_away_from_zero() {
        assert_eq!(Heading::from_azimuth_degrees(0.5).degrees, 1);
        assert_eq!(Heading::from_azimuth_degrees(44.5).degrees, 45);
        // -0.5 rounds to -1, then normalizes
        assert_eq!(Heading::from_azimuth_degrees(-0.5).degrees, 359);
    }

    #[test]
    fn test_negative_azimuth_normalizes() {
        assert_eq!(Heading::from_azimuth_degrees(-1.0).degrees, 359);
        assert_eq!(Heading::from_azimuth_degrees(-90.0).degrees, 270);
        assert_eq!(Heading::from_azimuth_degrees(-179.6).degrees, 180);
    }

    #[test]
    fn test_cardinal_follows_degrees() {
        assert_eq!(Heading::from_azimuth_degrees(0.0).cardinal, Cardinal::North);
        assert_eq!(Heading::from_azimuth_degrees(44.9).cardinal, Cardinal::NorthEast);
        assert_eq!(Heading::from_azimuth_degrees(-1.0).cardinal, Cardinal::NorthWest);
        assert_eq!(Heading::from_azimuth_degrees(-45.0).cardinal, Cardinal::NorthWest);
        assert_eq!(Heading::from_azimuth_degrees(180.0).cardinal, Cardinal::South);
    }

    #[test]
    fn test_degenerate_input_is_explicit() {
        let flat = Vector3::new(0.0, 0.0, 9.81);
        assert_eq!(
            compute_heading(flat, Vector3::zeros()),
            Err(HeadingError::DegenerateInput)
        );
        assert_eq!(
            compute_heading(Vector3::zeros(), Vector3::new(0.0, 50.0, 0.0)),
            Err(HeadingError::DegenerateInput)
        );
    }

    #[test]
    fn test_idempotent() {
        let accel = Vector3::new(0.3, -1.1, 9.7);
        let magnet = Vector3::new(18.0, 44.0, -30.0);

        let first = compute_heading(accel, magnet);
        let second = compute_heading(accel, magnet);
        assert_eq!(first, second);
    }
}
