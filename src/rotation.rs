//! Rotation matrix derivation from gravity and geomagnetic vectors
//!
//! This module reconstructs the device-to-earth rotation matrix the same way
//! handheld platform sensor APIs do: the gravity vector fixes the vertical
//! axis, the geomagnetic vector fixes the horizontal reference, and two cross
//! products complete an orthonormal triad. Orientation angles are then read
//! directly out of the matrix entries.

use crate::math::Vector3Ext;
use crate::types::{HeadingError, Orientation};
use nalgebra::{Matrix3, Vector3};

/// Squared-magnitude floor for the cross product of the normalized input
/// vectors. Below this the gravity and geomagnetic directions are too close
/// to parallel to span a horizontal plane (free fall, magnetic pole), and no
/// rotation matrix exists.
const MIN_CROSS_NORM_SQUARED: f32 = 1e-6;

/// Derive the device-to-earth rotation matrix
///
/// The matrix rows are, in order: the horizontal axis `H` orthogonal to both
/// inputs (`magnetometer × accelerometer`), the horizontal magnetic-north
/// axis `M` (`accelerometer × H`), and the vertical axis (normalized
/// accelerometer). All three rows are unit length and mutually orthogonal.
///
/// # Arguments
/// * `accelerometer` - Gravity vector in the sensor's native unit
/// * `magnetometer` - Geomagnetic vector in the sensor's native unit
///
/// # Errors
/// [`HeadingError::DegenerateInput`] when either vector is (near)
/// zero-length, or the two are (near) parallel so that the cross product
/// collapses. The caller gets an explicit unavailable result rather than a
/// matrix fabricated from zero vectors.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_heading::rotation_matrix;
///
/// // Device flat, magnetic north along the device's local Y axis
/// let accel = Vector3::new(0.0, 0.0, 9.81);
/// let magnet = Vector3::new(0.0, 50.0, 0.0);
///
/// let rotation = rotation_matrix(accel, magnet).unwrap();
/// assert!((rotation - nalgebra::Matrix3::identity()).norm() < 1e-6);
/// ```
pub fn rotation_matrix(
    accelerometer: Vector3<f32>,
    magnetometer: Vector3<f32>,
) -> Result<Matrix3<f32>, HeadingError> {
    let up = accelerometer.safe_normalize();
    let field = magnetometer.safe_normalize();

    // Zero-length input normalizes to the zero vector
    if up == Vector3::zeros() || field == Vector3::zeros() {
        return Err(HeadingError::DegenerateInput);
    }

    let horizontal = field.cross(&up);
    if horizontal.magnitude_squared() < MIN_CROSS_NORM_SQUARED {
        return Err(HeadingError::DegenerateInput);
    }

    let horizontal = horizontal.safe_normalize();
    let north = up.cross(&horizontal);

    Ok(Matrix3::from_rows(&[
        horizontal.transpose(),
        north.transpose(),
        up.transpose(),
    ]))
}

/// Extract orientation angles from a rotation matrix
///
/// Reads azimuth, pitch, and roll out of a matrix produced by
/// [`rotation_matrix`]. The azimuth is measured clockwise from magnetic
/// north in the range (−π, π]: a geomagnetic field along the device's local
/// +Y axis yields 0 and a field along local +X yields +π/2.
///
/// Pure function; the matrix is not modified.
pub fn orientation(rotation: &Matrix3<f32>) -> Orientation {
    Orientation {
        azimuth: (-rotation[(0, 1)]).atan2(rotation[(1, 1)]),
        pitch: (-rotation[(2, 1)]).asin(),
        roll: (-rotation[(2, 0)]).atan2(rotation[(2, 2)]),
    }
}
