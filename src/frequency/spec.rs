//! Frequency Specification
//!
//! Value object describing how often an activity or sale happens:
//! a kind, a count or interval, and the number of months per year
//! the activity is possible. Every field is clamped on construction.

use crate::utils::{clamp_count, parse_count};
use serde::{Deserialize, Serialize};

pub const MIN_ACTIVE_MONTHS: u32 = 1;
pub const MAX_ACTIVE_MONTHS: u32 = 12;

/// How the count/interval of a frequency is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyKind {
    Once,
    PerMonth,
    PerWeek,
    EveryXMonths,
    EveryXWeeks,
    PerYear,
}

impl FrequencyKind {
    /// Parse the option value used by the form's frequency selector
    ///
    /// Unknown values fall back to `Once`.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "once" => FrequencyKind::Once,
            "per_month" | "monthly" => FrequencyKind::PerMonth,
            "per_week" | "weekly" => FrequencyKind::PerWeek,
            "every_x_months" => FrequencyKind::EveryXMonths,
            "every_x_weeks" => FrequencyKind::EveryXWeeks,
            "per_year" | "yearly" => FrequencyKind::PerYear,
            other => {
                tracing::debug!("Unknown frequency kind '{}', using once", other);
                FrequencyKind::Once
            }
        }
    }
}

/// Clamped frequency specification
///
/// Deserializing goes through [`FrequencySpec::new`], so out-of-range JSON
/// values are clamped the same way form input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawFrequency")]
pub struct FrequencySpec {
    kind: FrequencyKind,
    value: u32,
    every_x: u32,
    active_months: u32,
}

/// Unclamped wire form of a frequency
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawFrequency {
    kind: FrequencyKind,
    #[serde(default = "one")]
    value: i64,
    #[serde(default = "one")]
    every_x: i64,
    #[serde(default = "twelve")]
    active_months: i64,
}

fn one() -> i64 {
    1
}

fn twelve() -> i64 {
    12
}

impl From<RawFrequency> for FrequencySpec {
    fn from(raw: RawFrequency) -> Self {
        FrequencySpec::new(raw.kind, raw.value, raw.every_x, raw.active_months)
    }
}

/// Single-field update coming from the frequency controls of a row
#[derive(Debug, Clone, PartialEq)]
pub enum FrequencyCommand {
    SetKind(FrequencyKind),
    SetValue(i64),
    SetEveryX(i64),
    SetActiveMonths(i64),
}

impl FrequencySpec {
    /// Build a spec, clamping `value` and `every_x` to >= 1 and
    /// `active_months` to [1, 12]
    pub fn new(kind: FrequencyKind, value: i64, every_x: i64, active_months: i64) -> Self {
        let clamped = Self {
            kind,
            value: clamp_count(value, 1, u32::MAX),
            every_x: clamp_count(every_x, 1, u32::MAX),
            active_months: clamp_count(active_months, MIN_ACTIVE_MONTHS, MAX_ACTIVE_MONTHS),
        };
        if i64::from(clamped.active_months) != active_months {
            tracing::debug!(
                "Active months {} clamped to {}",
                active_months,
                clamped.active_months
            );
        }
        clamped
    }

    /// Build a spec straight from the form's text fields
    pub fn from_raw(kind: &str, value: &str, every_x: &str, active_months: &str) -> Self {
        Self::new(
            FrequencyKind::from_key(kind),
            parse_count(value),
            parse_count(every_x),
            parse_count(active_months),
        )
    }

    pub fn once() -> Self {
        Self::new(FrequencyKind::Once, 1, 1, 12)
    }

    pub fn per_month(value: i64, active_months: i64) -> Self {
        Self::new(FrequencyKind::PerMonth, value, 1, active_months)
    }

    pub fn per_week(value: i64, active_months: i64) -> Self {
        Self::new(FrequencyKind::PerWeek, value, 1, active_months)
    }

    pub fn per_year(value: i64) -> Self {
        Self::new(FrequencyKind::PerYear, value, 1, 12)
    }

    pub fn every_x_months(every_x: i64, active_months: i64) -> Self {
        Self::new(FrequencyKind::EveryXMonths, 1, every_x, active_months)
    }

    pub fn every_x_weeks(every_x: i64, active_months: i64) -> Self {
        Self::new(FrequencyKind::EveryXWeeks, 1, every_x, active_months)
    }

    pub fn kind(&self) -> FrequencyKind {
        self.kind
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn every_x(&self) -> u32 {
        self.every_x
    }

    pub fn active_months(&self) -> u32 {
        self.active_months
    }

    /// Apply one field edit, returning the updated (re-clamped) spec
    pub fn apply(self, command: FrequencyCommand) -> Self {
        let (value, every_x, months) = (
            i64::from(self.value),
            i64::from(self.every_x),
            i64::from(self.active_months),
        );
        match command {
            FrequencyCommand::SetKind(kind) => Self::new(kind, value, every_x, months),
            FrequencyCommand::SetValue(v) => Self::new(self.kind, v, every_x, months),
            FrequencyCommand::SetEveryX(x) => Self::new(self.kind, value, x, months),
            FrequencyCommand::SetActiveMonths(m) => Self::new(self.kind, value, every_x, m),
        }
    }
}

impl Default for FrequencySpec {
    fn default() -> Self {
        Self::once()
    }
}
