//! Utility modules shared by the calculators
//!
//! - Input: raw field text → safe numbers and clamped counts
//! - Format: compact number rendering for descriptions and ratio text

pub mod input;
pub mod format;

pub use input::{clamp_count, non_negative, parse_count, parse_non_negative};
pub use format::{format_ratio, trim_number};
