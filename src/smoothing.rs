//! Exponential smoothing for raw sensor vector streams
//!
//! Consumer-grade magnetometers and accelerometers are noisy enough to make a
//! displayed heading flicker. This filter sits in front of the estimator:
//! feed each raw event through [`LowPassFilter::update`] and hand the result
//! to the matching estimator update. The estimator itself stays filter-free.

use nalgebra::Vector3;

/// First-order exponential low-pass filter for 3-axis readings
///
/// `state = coefficient × input + (1 − coefficient) × state`. The first
/// sample passes through unfiltered. Higher coefficients track the input
/// more closely; lower coefficients smooth harder at the cost of lag.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_heading::LowPassFilter;
///
/// let mut filter = LowPassFilter::new(0.25);
///
/// let first = filter.update(Vector3::new(0.0, 50.0, 0.0));
/// assert_eq!(first, Vector3::new(0.0, 50.0, 0.0)); // passthrough
///
/// let second = filter.update(Vector3::new(0.0, 54.0, 0.0));
/// assert!((second.y - 51.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LowPassFilter {
    /// Smoothing coefficient in (0, 1]
    coefficient: f32,
    /// Previous filtered output, `None` before the first sample
    state: Option<Vector3<f32>>,
}

impl LowPassFilter {
    /// Create a filter with the given smoothing coefficient
    ///
    /// The coefficient is clamped into (0, 1]; a coefficient of 1 disables
    /// smoothing entirely.
    pub fn new(coefficient: f32) -> Self {
        Self {
            coefficient: coefficient.clamp(f32::EPSILON, 1.0),
            state: None,
        }
    }

    /// Filter one raw reading and return the smoothed value
    pub fn update(&mut self, input: Vector3<f32>) -> Vector3<f32> {
        let filtered = match self.state {
            Some(previous) => previous + (input - previous) * self.coefficient,
            None => input,
        };

        self.state = Some(filtered);
        filtered
    }

    /// Drop the filter state; the next sample passes through unfiltered
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// The smoothing coefficient in use
    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }
}
