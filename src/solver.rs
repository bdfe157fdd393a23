//! True wind solver
//!
//! Runs the full pipeline for one snapshot: validation, apparent wind
//! normalization, attitude correction, leeway, true wind and current.

use crate::attitude::correct_attitude;
use crate::current::{Track, estimate_current};
use crate::error::{Result, TrueWindError};
use crate::leeway::LeewayModel;
use crate::math::{DEG_TO_RAD, RAD_TO_DEG, wrap_bearing, wrap_relative};
use crate::types::{Corrections, TrueWindInput, TrueWindOutput, WindReading};
use nalgebra::{ComplexField, RealField, Vector2};

impl Corrections {
    /// Validated leeway model, `None` when leeway correction is disabled
    ///
    /// # Errors
    /// Returns [`TrueWindError::InvalidConfiguration`] when a leeway coefficient
    /// is given without the unit of boat speed.
    pub fn leeway_model(&self) -> Result<Option<LeewayModel>> {
        if self.leeway_coefficient == 0.0 {
            return Ok(None);
        }

        match self.speed_unit {
            Some(unit) => Ok(Some(LeewayModel::new(self.leeway_coefficient, unit))),
            None => Err(TrueWindError::InvalidConfiguration {
                leeway_coefficient: self.leeway_coefficient,
            }),
        }
    }
}

/// Compute true wind, leeway, VMG and current for one snapshot of readings
///
/// # Errors
/// Returns [`TrueWindError::InvalidConfiguration`] when
/// `corrections.leeway_coefficient` is non-zero and `corrections.speed_unit`
/// is `None`. Nothing is computed in that case.
///
/// # Example
/// ```
/// use truewind::{TrueWindInput, compute_true_wind};
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
///
/// let output = compute_true_wind(input).unwrap();
/// assert!((output.true_wind_speed - 7.094090).abs() < 1e-6);
/// assert_eq!(output.true_wind_angle, 85.0);
/// ```
pub fn compute_true_wind(input: TrueWindInput) -> Result<TrueWindOutput> {
    let corrections = input.corrections;

    let leeway_model = corrections.leeway_model().inspect_err(|error| {
        log::warn!("{}", error);
    })?;

    let wind = WindReading::new(
        input.apparent_wind_speed,
        wrap_relative(input.apparent_wind_angle),
    );
    let apparent = correct_attitude(wind, corrections.roll, corrections.pitch);

    let leeway = leeway_model.map_or(0.0, |model| {
        model.leeway(input.boat_speed, corrections.roll, apparent.angle)
    });
    let leeway_rad = leeway * DEG_TO_RAD;

    let speed_through_water = input.boat_speed / leeway_rad.cos();
    let lateral_speed = speed_through_water * leeway_rad.sin();

    // Wind vectors in a frame with the bow along +y
    let apparent_angle = (270.0 - apparent.angle) * DEG_TO_RAD;
    let apparent_vector = Vector2::new(
        apparent.speed * apparent_angle.cos(),
        apparent.speed * apparent_angle.sin(),
    );
    let true_vector = apparent_vector + Vector2::new(lateral_speed, input.boat_speed);

    let true_wind_speed = true_vector.norm();
    let true_wind_angle = resolve_true_wind_angle(true_vector, apparent.angle);

    let velocity_made_good =
        speed_through_water * ((-true_wind_angle + leeway) * DEG_TO_RAD).cos();

    let true_wind_direction =
        wrap_bearing(input.heading + true_wind_angle) + corrections.variation;

    let current = estimate_current(
        Track::new(
            input.speed_over_ground,
            input.course_over_ground - corrections.variation,
        ),
        Track::new(speed_through_water, input.heading + leeway),
        corrections.variation,
    );

    let output = TrueWindOutput {
        apparent_wind_angle: apparent.angle,
        apparent_wind_speed: apparent.speed,
        leeway,
        speed_through_water,
        velocity_made_good,
        true_wind_speed,
        true_wind_angle,
        true_wind_direction,
        current_speed: current.speed,
        current_direction: current.direction,
    };
    log::trace!("{:?}", output);

    Ok(output)
}

/// True wind angle relative to the bow from the true wind vector
///
/// For winds with a non-negative apparent angle the result is truncated to
/// whole degrees before being reduced modulo 360. Port-side winds keep their
/// fractional part.
fn resolve_true_wind_angle(true_vector: Vector2<f64>, apparent_wind_angle: f64) -> f64 {
    if true_vector.x == 0.0 && true_vector.y == 0.0 {
        return apparent_wind_angle;
    }

    let angle = 270.0 - true_vector.y.atan2(true_vector.x) * RAD_TO_DEG;
    let angle = if apparent_wind_angle >= 0.0 {
        ((angle as i64) % 360) as f64
    } else {
        angle - 360.0
    };

    wrap_relative(angle)
}
