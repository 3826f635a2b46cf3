//! Survey Calculators
//!
//! Calculation core behind the fisheries / seaweed-farming field survey forms.
//!
//! - `frequency/`: "N per week", "every X months", ... → occurrences per year
//! - `ratio/`: fresh weight ↔ dried weight ↔ fresh:dry ratio propagation
//! - `calculators/`: production income, activity schedule, household
//!   earnings, investment depreciation
//! - `survey`: all forms of one household survey combined
//!
//! Everything here is synchronous and pure; raw form text is normalized by
//! `utils::input` before it reaches a calculator.

pub mod calculators;
pub mod config;
pub mod error;
pub mod frequency;
pub mod ratio;
pub mod survey;
pub mod utils;

// Re-export commonly used types
pub use config::CalcConfig;
pub use error::CalcError;
pub use frequency::{annual_occurrences, describe, FrequencyCommand, FrequencyKind, FrequencySpec};
pub use ratio::{Ratio, RatioCommand, RatioState};
pub use survey::{summarize, SurveyInput, SurveySummary};
