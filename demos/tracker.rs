use compass_heading::{HeadingEstimator, LowPassFilter};
use nalgebra::Vector3;

// Accelerometer and magnetometer events arrive on independent streams; this
// demo replays an interleaved sequence the way a sensor callback would.
fn main() {
    let mut estimator = HeadingEstimator::new();
    let mut magnet_filter = LowPassFilter::new(0.3);

    println!("heading before any samples: {:?}", estimator.heading());

    estimator.update_accelerometer(Vector3::new(0.0, 0.0, 9.81));
    println!("after accelerometer only:   {:?}", estimator.heading());

    // Magnetometer events while the device turns from north toward east
    for bearing_deg in [0.0f32, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0] {
        let bearing = bearing_deg.to_radians();
        let raw = Vector3::new(48.0 * bearing.sin(), 48.0 * bearing.cos(), -35.0);

        estimator.update_magnetometer(magnet_filter.update(raw));

        match estimator.heading() {
            Ok(heading) => println!("field at {:5.1}°  ->  {}", bearing_deg, heading),
            Err(e) => println!("field at {:5.1}°  ->  {}", bearing_deg, e),
        }
    }

    // Orientation triple is available from the same samples
    if let Ok(angles) = estimator.orientation() {
        let degrees = angles.to_degrees();
        println!(
            "azimuth {:.1}°, pitch {:.1}°, roll {:.1}°",
            degrees.azimuth, degrees.pitch, degrees.roll
        );
    }
}
