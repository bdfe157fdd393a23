//! Current (set and drift) estimation
//!
//! The current is the difference between where the boat goes over the ground
//! and where it goes through the water. Both tracks are turned into east/north
//! velocity vectors and subtracted.

use crate::math::{DEG_TO_RAD, RAD_TO_DEG, wrap_bearing};
use nalgebra::{ComplexField, RealField, Vector2};

/// Below this magnitude on both axes the current has no meaningful direction
pub const CURRENT_EPSILON: f64 = 1e-9;

/// A speed along a course
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Track {
    /// Speed along the track
    pub speed: f64,
    /// Course in degrees, clockwise from north
    pub course: f64,
}

impl Track {
    pub fn new(speed: f64, course: f64) -> Self {
        Self { speed, course }
    }

    /// Velocity vector as (east, north)
    ///
    /// # Example
    /// ```
    /// use truewind::Track;
    ///
    /// let east = Track::new(5.0, 90.0).velocity();
    /// assert!((east.x - 5.0).abs() < 1e-12);
    /// assert!(east.y.abs() < 1e-12);
    /// ```
    pub fn velocity(&self) -> Vector2<f64> {
        let angle = (90.0 - self.course) * DEG_TO_RAD;
        Vector2::new(self.speed * angle.cos(), self.speed * angle.sin())
    }
}

/// Estimated current
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Current {
    /// Speed of current (drift)
    pub speed: f64,
    /// Direction the current flows towards (set), in degrees
    pub direction: f64,
}

/// Estimate current from the ground track and the water track
///
/// # Arguments
/// * `ground` - Speed and course over ground, course in the same reference as `water`
/// * `water` - Speed through water and heading corrected for leeway
/// * `variation` - Added to the resulting direction, without re-normalization
///
/// # Returns
/// Current speed and direction. When the current vector has no direction the
/// direction falls back to 0°, or 180° if its north component is negative.
///
/// # Example
/// ```
/// use truewind::{Track, estimate_current};
///
/// // Heading north at 5 kt but making 5 kt due east over the ground
/// let current = estimate_current(Track::new(5.0, 90.0), Track::new(5.0, 0.0), 0.0);
///
/// assert!((current.speed - 50.0f64.sqrt()).abs() < 1e-9);
/// assert!((current.direction - 135.0).abs() < 1e-9);
/// ```
pub fn estimate_current(ground: Track, water: Track, variation: f64) -> Current {
    let current = ground.velocity() - water.velocity();
    let speed = current.norm();

    let angle = current.y.atan2(current.x);
    let undefined = angle.is_nan()
        || (current.x.abs() < CURRENT_EPSILON && current.y.abs() < CURRENT_EPSILON);

    let direction = if undefined {
        if current.y < 0.0 { 180.0 } else { 0.0 }
    } else {
        wrap_bearing(90.0 - angle * RAD_TO_DEG)
    };

    Current {
        speed,
        direction: direction + variation,
    }
}
