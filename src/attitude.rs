//! Static attitude correction for a heeled or pitched wind sensor
//!
//! A masthead anemometer tilted by roll and pitch sees only the projection of
//! the horizontal wind onto its own plane. Dividing each component by the
//! cosine of the matching tilt angle restores the horizontal wind. Corrections
//! for the sensor's rotational velocity are not applied.

use crate::math::{DEG_TO_RAD, RAD_TO_DEG};
use crate::types::WindReading;
use nalgebra::{ComplexField, RealField};

/// Correct an apparent wind reading for sensor roll and pitch
///
/// Returns the reading unchanged when either `roll` or `pitch` is zero, since
/// zero means the attitude is unknown. Otherwise the corrected angle is in the
/// range [0°, 360°).
///
/// # Arguments
/// * `wind` - Apparent wind reading (angle in degrees relative to the bow)
/// * `roll` - Sensor roll in degrees
/// * `pitch` - Sensor pitch in degrees
///
/// # Example
/// ```
/// use truewind::{WindReading, correct_attitude};
///
/// let wind = WindReading::new(10.0, 90.0);
/// let corrected = correct_attitude(wind, 20.0, 5.0);
///
/// // Beam wind is only affected by roll
/// assert!((corrected.speed - 10.0 / 20.0f64.to_radians().cos()).abs() < 1e-9);
/// assert!((corrected.angle - 90.0).abs() < 1e-9);
/// ```
pub fn correct_attitude(wind: WindReading, roll: f64, pitch: f64) -> WindReading {
    if roll == 0.0 || pitch == 0.0 {
        return wind;
    }

    let angle = if wind.angle < 0.0 {
        wind.angle + 360.0
    } else {
        wind.angle
    };

    let angle_rad = angle * DEG_TO_RAD;
    let lateral = wind.speed * angle_rad.sin() / (roll * DEG_TO_RAD).cos();
    let axial = wind.speed * angle_rad.cos() / (pitch * DEG_TO_RAD).cos();

    // atan2(0, 0) carries no direction, keep the reading as it was
    if lateral == 0.0 && axial == 0.0 {
        return WindReading::new(wind.speed, angle);
    }

    let speed = lateral.hypot(axial);
    let mut corrected_angle = lateral.atan2(axial) * RAD_TO_DEG;
    if corrected_angle < 0.0 {
        corrected_angle += 360.0;
    }

    WindReading::new(speed, corrected_angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_roll_or_pitch_is_identity() {
        let wind = WindReading::new(12.3, -135.0);

        assert_eq!(correct_attitude(wind, 0.0, 7.0), wind);
        assert_eq!(correct_attitude(wind, 15.0, 0.0), wind);
        assert_eq!(correct_attitude(wind, 0.0, 0.0), wind);
    }

    #[test]
    fn test_head_wind_only_affected_by_pitch() {
        let wind = WindReading::new(10.0, 0.0);
        let corrected = correct_attitude(wind, 30.0, 10.0);

        let expected_speed = 10.0 / (10.0 * DEG_TO_RAD).cos();
        assert!(
            (corrected.speed - expected_speed).abs() < 1e-9,
            "Expected speed {}, got {}",
            expected_speed,
            corrected.speed
        );
        assert!(corrected.angle.abs() < 1e-9);
    }

    #[test]
    fn test_quartering_wind_correction() {
        let wind = WindReading::new(10.0, 45.0);
        let roll: f64 = 20.0;
        let pitch: f64 = 5.0;
        let corrected = correct_attitude(wind, roll, pitch);

        let lateral = 10.0 * (45.0 * DEG_TO_RAD).sin() / (roll * DEG_TO_RAD).cos();
        let axial = 10.0 * (45.0 * DEG_TO_RAD).cos() / (pitch * DEG_TO_RAD).cos();

        assert!((corrected.speed - lateral.hypot(axial)).abs() < 1e-9);
        assert!((corrected.angle - lateral.atan2(axial) * RAD_TO_DEG).abs() < 1e-9);

        // Roll inflates the lateral component more than pitch inflates the axial one
        assert!(corrected.angle > 45.0);
        assert!(corrected.speed > 10.0);
    }

    #[test]
    fn test_port_wind_returns_positive_angle() {
        let wind = WindReading::new(8.0, -60.0);
        let corrected = correct_attitude(wind, -10.0, 3.0);

        assert!(
            (0.0..360.0).contains(&corrected.angle),
            "Angle {} outside [0, 360)",
            corrected.angle
        );
        assert!((corrected.angle - 300.0).abs() < 2.0);
    }

    #[test]
    fn test_calm_keeps_normalized_angle() {
        let wind = WindReading::new(0.0, -90.0);
        let corrected = correct_attitude(wind, 10.0, 10.0);

        assert_eq!(corrected.speed, 0.0);
        assert_eq!(corrected.angle, 270.0);
    }
}
