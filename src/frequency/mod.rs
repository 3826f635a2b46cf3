//! Frequency normalization
//!
//! Activity and sale rows describe "how often" in several shapes
//! (N per week, every X months, ...). This module normalizes them all
//! to occurrences per year.

pub mod spec;
pub mod normalizer;

pub use spec::{FrequencyCommand, FrequencyKind, FrequencySpec};
pub use normalizer::{annual_occurrences, describe};
