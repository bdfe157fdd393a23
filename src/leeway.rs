//! Leeway estimation from heel angle and boat speed
//!
//! Uses the empirical model `leeway = K * heel / stw²` with boat speed in
//! knots. The coefficient `K` depends on the hull and is usually found by
//! calibration runs.

use crate::types::SpeedUnit;

/// Leeway is never reported beyond this angle in degrees
pub const MAX_LEEWAY: f64 = 45.0;

/// A validated leeway model: a non-zero coefficient and the unit of boat speed
///
/// # Example
/// ```
/// use truewind::{LeewayModel, SpeedUnit};
///
/// let model = LeewayModel::new(10.0, SpeedUnit::Knots);
///
/// // 6 kt, heeled 15° to port with the wind to starboard
/// let leeway = model.leeway(6.0, -15.0, 40.0);
/// assert!((leeway - (-10.0 * 15.0 / 36.0)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeewayModel {
    /// Leeway coefficient `K`
    pub coefficient: f64,
    /// Unit of the boat speed passed to [`LeewayModel::leeway`]
    pub unit: SpeedUnit,
}

impl LeewayModel {
    pub fn new(coefficient: f64, unit: SpeedUnit) -> Self {
        Self { coefficient, unit }
    }

    /// Estimate leeway in degrees
    ///
    /// Returns zero when the boat is stopped, not heeling, or heeling towards
    /// the side the wind comes from. The result is clamped to ±[`MAX_LEEWAY`].
    ///
    /// # Arguments
    /// * `boat_speed` - Boat speed through water in this model's unit
    /// * `roll` - Heel angle in degrees (positive to starboard)
    /// * `apparent_wind_angle` - Apparent wind angle in degrees (positive to starboard)
    pub fn leeway(&self, boat_speed: f64, roll: f64, apparent_wind_angle: f64) -> f64 {
        if boat_speed == 0.0 || roll == 0.0 || self.coefficient == 0.0 {
            return 0.0;
        }

        // Heeling into the wind gives no usable estimate
        if (roll > 0.0 && apparent_wind_angle > 0.0) || (roll < 0.0 && apparent_wind_angle < 0.0) {
            return 0.0;
        }

        let speed_kt = self.unit.to_knots(boat_speed);
        let leeway = self.coefficient * roll / (speed_kt * speed_kt);

        if leeway.is_nan() || (-MAX_LEEWAY..=MAX_LEEWAY).contains(&leeway) {
            return leeway;
        }

        log::debug!(
            "Leeway {:.1}° clamped to ±{}° (K={}, roll={}°, stw={} kt)",
            leeway,
            MAX_LEEWAY,
            self.coefficient,
            roll,
            speed_kt
        );
        leeway.clamp(-MAX_LEEWAY, MAX_LEEWAY)
    }
}
