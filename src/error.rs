//! Error types for the fallible edges of the crate
//!
//! The calculators themselves never fail: bad field input is normalized
//! before it reaches them. Only configuration and survey files can be rejected.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("weeks per month must be a finite value in (4, 5), got {0}")]
    InvalidWeeksPerMonth(f64),

    #[error("hours per day must be a finite positive value, got {0}")]
    InvalidHoursPerDay(f64),

    #[error("survey '{survey}' has no rows to summarize")]
    EmptySurvey { survey: String },
}
