//! Mathematical utilities and nalgebra extensions

use nalgebra::Vector3;

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Extension trait for Vector3 operations
pub trait Vector3Ext {
    /// Calculate the magnitude of the vector
    fn magnitude(&self) -> f32;

    /// Normalize the vector, returning zero vector if magnitude is zero
    fn safe_normalize(&self) -> Vector3<f32>;
}

impl Vector3Ext for Vector3<f32> {
    fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn safe_normalize(&self) -> Vector3<f32> {
        let mag = self.magnitude();
        if mag > 0.0 {
            *self / mag
        } else {
            Vector3::zeros()
        }
    }
}
