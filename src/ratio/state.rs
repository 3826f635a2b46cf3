//! Ratio State
//!
//! Per-row value holding fresh weight, dried weight and the fresh:dry ratio
//! that links them (`fresh = ratio × dried`).

use super::parse::{parse_ratio_input, DEFAULT_RATIO};
use crate::utils::{format_ratio, trim_number};
use serde::{Deserialize, Serialize};

/// Fresh:dry multiplier, or the explicit "no ratio" state reached when
/// dried weight is positive but fresh weight is zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ratio {
    Defined(f64),
    Undefined,
}

impl Ratio {
    pub fn value(&self) -> Option<f64> {
        match self {
            Ratio::Defined(r) => Some(*r),
            Ratio::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Ratio::Defined(_))
    }

    /// Display form: `"4:1"`, or `"N/A"` for the undefined state
    pub fn display(&self) -> String {
        match self {
            Ratio::Defined(r) => format_ratio(*r),
            Ratio::Undefined => "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioState {
    pub(super) fresh_weight: f64,
    pub(super) dried_weight: f64,
    pub(super) ratio: Ratio,
    /// Ratio as last typed, or as reformatted after a dried-weight edit
    pub(super) ratio_text: String,
}

impl RatioState {
    /// Empty row: no weights, ratio 1:1
    pub fn new() -> Self {
        Self {
            fresh_weight: 0.0,
            dried_weight: 0.0,
            ratio: Ratio::Defined(DEFAULT_RATIO),
            ratio_text: trim_number(DEFAULT_RATIO, 2),
        }
    }

    /// Row seeded from fresh weight and ratio text, dried weight derived
    pub fn with_fresh_and_ratio(fresh_weight: f64, ratio_text: &str) -> Self {
        Self::new()
            .on_ratio_input_change(ratio_text)
            .on_fresh_weight_change(fresh_weight)
    }

    pub fn fresh_weight(&self) -> f64 {
        self.fresh_weight
    }

    pub fn dried_weight(&self) -> f64 {
        self.dried_weight
    }

    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    pub fn ratio_text(&self) -> &str {
        &self.ratio_text
    }

    /// Ratio to fall back on when the stored ratio is undefined
    pub(super) fn ratio_from_text(&self) -> f64 {
        parse_ratio_input(&self.ratio_text)
    }
}

impl Default for RatioState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = RatioState::new();
        assert_eq!(state.fresh_weight(), 0.0);
        assert_eq!(state.dried_weight(), 0.0);
        assert_eq!(state.ratio(), Ratio::Defined(1.0));
        assert_eq!(state.ratio_text(), "1");
    }

    #[test]
    fn test_ratio_display() {
        assert_eq!(Ratio::Defined(4.0).display(), "4:1");
        assert_eq!(Ratio::Undefined.display(), "N/A");
        assert_eq!(Ratio::Undefined.value(), None);
        assert!(!Ratio::Undefined.is_defined());
    }

    #[test]
    fn test_ratio_serialization() {
        assert_eq!(serde_json::to_string(&Ratio::Undefined).unwrap(), r#""undefined""#);
        assert_eq!(serde_json::to_string(&Ratio::Defined(4.0)).unwrap(), r#"{"defined":4.0}"#);
    }
}
