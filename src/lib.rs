#![no_std]

//! Tilt-compensated compass heading estimation from raw accelerometer and
//! magnetometer vectors.
//!
//! This library derives a device-to-earth rotation matrix from the gravity
//! vector (accelerometer) and the geomagnetic vector (magnetometer), extracts
//! the azimuth, normalizes it to a whole-degree bearing in `[0, 360)`, and
//! maps it onto one of eight 45° cardinal sectors (N, NE, E, SE, S, SW, W,
//! NW). It is the heading pipeline of a handheld compass display, extracted
//! into a pure, platform-independent core.
//!
//! # Features
//!
//! - Pure heading computation: two vectors in, `{degrees, cardinal}` out
//! - Full orientation triple (azimuth, pitch, roll) from the same matrix
//! - Explicit unavailable result for degenerate input — never a panic,
//!   never a fabricated 0°
//! - [`HeadingEstimator`] caching the most recent reading per sensor for
//!   event-driven delivery
//! - Optional exponential smoothing for jittery consumer-grade sensors
//! - `#![no_std]` compatible for embedded targets
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use compass_heading::HeadingEstimator;
//!
//! let mut estimator = HeadingEstimator::new();
//!
//! // Sensor readings arrive on independent event streams
//! estimator.update_accelerometer(Vector3::new(0.0, 0.0, 9.81)); // m/s²
//! estimator.update_magnetometer(Vector3::new(0.0, 50.0, 0.0));  // µT
//!
//! let heading = estimator.heading().unwrap();
//! assert_eq!(heading.degrees, 0);
//! assert_eq!(heading.cardinal.as_str(), "N");
//!
//! // Callers may format the two fields freely
//! println!("{}° ({})", heading.degrees, heading.cardinal);
//! ```

pub mod cardinal;
pub mod estimator;
pub mod heading;
mod math;
pub mod rotation;
pub mod smoothing;
mod types;

// Re-export all public types and functions
pub use cardinal::Cardinal;
pub use estimator::HeadingEstimator;
pub use heading::{Heading, compute_heading};
pub use math::{DEG_TO_RAD, RAD_TO_DEG, Vector3Ext};
pub use rotation::{orientation, rotation_matrix};
pub use smoothing::LowPassFilter;
pub use types::*;
