use compass_heading::compute_heading;
use nalgebra::Vector3;

fn main() {
    // Device held flat while turning through a full circle
    let accelerometer = Vector3::new(0.0, 0.0, 9.81); // m/s²

    for bearing_deg in (0..360).step_by(30) {
        let bearing = (bearing_deg as f32).to_radians();

        // Geomagnetic field as the device would see it at this bearing,
        // with a realistic downward inclination
        let magnetometer = Vector3::new(
            48.0 * bearing.sin(),
            48.0 * bearing.cos(),
            -35.0,
        ); // µT

        match compute_heading(accelerometer, magnetometer) {
            Ok(heading) => println!("{}", heading),
            Err(e) => println!("{}", e),
        }
    }
}
