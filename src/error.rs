//! Error types for the true wind library

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TrueWindError {
    #[error(
        "Invalid configuration: leeway coefficient {leeway_coefficient} requires a speed unit ('m/s' or 'kt') for boat speed"
    )]
    InvalidConfiguration { leeway_coefficient: f64 },
}

pub type Result<T> = core::result::Result<T, TrueWindError>;
