//! Angle and unit conversion utilities for the true wind library

/// Mathematical constants
pub const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// Metres per second to knots
pub const MS_TO_KT: f64 = 1.94384;

/// Wrap a relative angle into (-180°, 180°]
///
/// A single wrap is applied, so inputs are expected within one turn of the
/// target range (-540°, 540°].
///
/// # Example
/// ```
/// use truewind::wrap_relative;
///
/// assert_eq!(wrap_relative(270.0), -90.0);
/// assert_eq!(wrap_relative(-270.0), 90.0);
/// assert_eq!(wrap_relative(180.0), 180.0);
/// ```
#[inline]
pub fn wrap_relative(angle: f64) -> f64 {
    if angle > 180.0 {
        angle - 360.0
    } else if angle < -180.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Wrap a bearing into [0°, 360°) with a single wrap
///
/// # Example
/// ```
/// use truewind::wrap_bearing;
///
/// assert_eq!(wrap_bearing(370.0), 10.0);
/// assert_eq!(wrap_bearing(-10.0), 350.0);
/// ```
#[inline]
pub fn wrap_bearing(angle: f64) -> f64 {
    if angle >= 360.0 {
        angle - 360.0
    } else if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}
