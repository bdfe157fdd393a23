#![no_std]

//! [![github]](https://github.com/wboayue/truewind)&ensp;[![crates-io]](https://crates.io/crates/truewind)&ensp;[![license]](https://opensource.org/licenses/MIT)
//!
//! [github]: https://img.shields.io/badge/github-8da0cb?style=for-the-badge&labelColor=555555&logo=github
//! [crates-io]: https://img.shields.io/badge/crates.io-fc8d62?style=for-the-badge&labelColor=555555&logo=rust
//! [license]: https://img.shields.io/badge/License-MIT-blue.svg?style=for-the-badge&labelColor=555555
//!
//! Truewind - true wind, leeway, VMG and current calculations for sailing instruments
//!
//! Given one snapshot of apparent wind and vessel motion readings, this library
//! derives true wind speed, angle and direction together with the set and drift
//! of the current. The methods follow:
//!
//! - <http://sailboatinstruments.blogspot.com/2011/05/true-wind-vmg-and-current-calculations.html>
//! - <https://kingtidesailing.blogspot.com/2015/10/correcting-nmea-0183-wind-for-vessel.html>
//!
//! # Features
//!
//! - Static roll and pitch correction of a masthead wind sensor
//! - Leeway estimation from heel angle and boat speed
//! - True wind speed, angle and direction, and velocity made good
//! - Current set and drift from ground track versus water track
//! - Stateless and allocation free, `#![no_std]` compatible for embedded systems
//!
//! # Quick Start
//!
//! ```rust
//! use truewind::{Corrections, SpeedUnit, TrueWindInput, compute_true_wind};
//!
//! let input = TrueWindInput {
//!     boat_speed: 6.5,
//!     speed_over_ground: 6.0,
//!     course_over_ground: 90.0,
//!     apparent_wind_speed: 10.0,
//!     apparent_wind_angle: -45.0,
//!     heading: 85.0,
//!     corrections: Corrections {
//!         variation: 2.0,
//!         roll: -12.0,
//!         pitch: 1.5,
//!         leeway_coefficient: 10.0,
//!         speed_unit: Some(SpeedUnit::Knots),
//!     },
//! };
//!
//! let output = compute_true_wind(input).unwrap();
//! println!(
//!     "TWS {:.1} TWA {:.0} TWD {:.0} current {:.1} @ {:.0}",
//!     output.true_wind_speed,
//!     output.true_wind_angle,
//!     output.true_wind_direction,
//!     output.current_speed,
//!     output.current_direction,
//! );
//! ```
//!
//! For more documentation and examples, see: <https://github.com/wboayue/truewind>

pub mod attitude;
pub mod current;
mod error;
pub mod leeway;
mod math;
mod solver;
mod types;

// Re-export all public types and functions
pub use attitude::correct_attitude;
pub use current::{Current, Track, estimate_current};
pub use error::{Result, TrueWindError};
pub use leeway::LeewayModel;
pub use math::{DEG_TO_RAD, MS_TO_KT, RAD_TO_DEG, wrap_bearing, wrap_relative};
pub use solver::compute_true_wind;
pub use types::*;
