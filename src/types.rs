//! Core types for the true wind library

use core::fmt;
use core::str::FromStr;

use crate::math::MS_TO_KT;

/// Unit of the speed inputs
///
/// Only the leeway estimate depends on absolute units, since its coefficient
/// is calibrated against boat speed in knots.
///
/// # Example
/// ```
/// use truewind::SpeedUnit;
///
/// let unit: SpeedUnit = "m/s".parse().unwrap();
/// assert_eq!(unit, SpeedUnit::MetersPerSecond);
/// assert_eq!(unit.to_string(), "m/s");
/// assert!("mph".parse::<SpeedUnit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    /// Knots (`"kt"`)
    Knots,
    /// Metres per second (`"m/s"`)
    MetersPerSecond,
}

impl SpeedUnit {
    /// Canonical text for the unit
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedUnit::Knots => "kt",
            SpeedUnit::MetersPerSecond => "m/s",
        }
    }

    /// Convert a speed in this unit to knots
    pub fn to_knots(&self, speed: f64) -> f64 {
        match self {
            SpeedUnit::Knots => speed,
            SpeedUnit::MetersPerSecond => speed * MS_TO_KT,
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing unrecognized speed unit text
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized speed unit, expected 'm/s' or 'kt'")]
pub struct ParseSpeedUnitError;

impl FromStr for SpeedUnit {
    type Err = ParseSpeedUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kt" => Ok(SpeedUnit::Knots),
            "m/s" => Ok(SpeedUnit::MetersPerSecond),
            _ => Err(ParseSpeedUnitError),
        }
    }
}

/// Optional corrections applied to the raw readings
///
/// Zero is the "not provided" value for `roll`, `pitch` and
/// `leeway_coefficient`: a zero roll or pitch disables attitude correction,
/// a zero coefficient disables leeway.
///
/// # Example
/// ```
/// use truewind::{Corrections, SpeedUnit};
///
/// let corrections = Corrections {
///     variation: -4.5,               // 4.5° W
///     roll: 12.0,                    // heeled 12° to starboard
///     leeway_coefficient: 10.0,
///     speed_unit: Some(SpeedUnit::Knots),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corrections {
    /// Magnetic variation in degrees, added to convert magnetic bearings to true
    pub variation: f64,
    /// Roll of the wind sensor in degrees (positive to starboard)
    pub roll: f64,
    /// Pitch of the wind sensor in degrees
    pub pitch: f64,
    /// Leeway coefficient `K`
    ///
    /// Leeway in degrees is estimated as `K * roll / stw²` with boat speed in knots.
    /// Typical values lie between 8 and 15.
    pub leeway_coefficient: f64,
    /// Unit of `boat_speed`, required when `leeway_coefficient` is non-zero
    pub speed_unit: Option<SpeedUnit>,
}

impl Default for Corrections {
    fn default() -> Self {
        Self {
            variation: 0.0,
            roll: 0.0,
            pitch: 0.0,
            leeway_coefficient: 0.0,
            speed_unit: None,
        }
    }
}

/// One snapshot of instrument readings
///
/// Angles are in degrees. Speeds may use any unit as long as it is the same
/// for all three speed fields.
///
/// # Example
/// ```
/// use truewind::TrueWindInput;
///
/// let input = TrueWindInput {
///     apparent_wind_angle: 45.0,
///     apparent_wind_speed: 10.0,
///     course_over_ground: 90.0,
///     heading: 85.0,
///     boat_speed: 6.5,
///     speed_over_ground: 6.0,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrueWindInput {
    /// Boat speed through the water as measured by the log, before leeway correction
    pub boat_speed: f64,
    /// Speed over ground
    pub speed_over_ground: f64,
    /// Course over ground in degrees
    pub course_over_ground: f64,
    /// Apparent wind speed
    pub apparent_wind_speed: f64,
    /// Apparent wind angle relative to the bow, positive to starboard
    pub apparent_wind_angle: f64,
    /// Heading in degrees magnetic
    pub heading: f64,
    /// Optional variation, attitude and leeway corrections
    pub corrections: Corrections,
}

/// A wind measurement relative to the sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindReading {
    /// Wind speed
    pub speed: f64,
    /// Wind angle in degrees
    pub angle: f64,
}

impl WindReading {
    pub fn new(speed: f64, angle: f64) -> Self {
        Self { speed, angle }
    }
}

/// Derived navigation values for one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrueWindOutput {
    /// Apparent wind angle after normalization and attitude correction
    pub apparent_wind_angle: f64,
    /// Apparent wind speed after attitude correction
    pub apparent_wind_speed: f64,
    /// Leeway angle in degrees
    pub leeway: f64,
    /// Speed through water corrected for leeway
    pub speed_through_water: f64,
    /// Velocity made good along the true wind axis
    pub velocity_made_good: f64,
    /// True wind speed
    pub true_wind_speed: f64,
    /// True wind angle relative to the bow
    pub true_wind_angle: f64,
    /// True wind direction, variation applied
    pub true_wind_direction: f64,
    /// Speed of current (drift)
    pub current_speed: f64,
    /// Direction of current (set), variation applied
    pub current_direction: f64,
}
