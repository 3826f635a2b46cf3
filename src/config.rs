//! Calculator Configuration
//!
//! Holds the unit-conversion constants shared by every calculator. Survey
//! forms have historically disagreed on weeks-per-month (4.3, 4.33, 52/12);
//! the crate uses 52/12 unless a config file says otherwise.

use crate::error::CalcError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Average weeks in a month (52 weeks / 12 months)
pub const DEFAULT_WEEKS_PER_MONTH: f64 = 52.0 / 12.0;

/// Working hours counted as one person-day
pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CalcConfig {
    pub weeks_per_month: f64,
    pub hours_per_day: f64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            weeks_per_month: DEFAULT_WEEKS_PER_MONTH,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
        }
    }
}

impl CalcConfig {
    /// Load configuration from a JSON file
    ///
    /// Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: CalcConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse config JSON")?;

        config.validate()?;

        tracing::info!(
            "Loaded config {:?} (weeks/month = {:.4}, hours/day = {})",
            path,
            config.weeks_per_month,
            config.hours_per_day
        );

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CalcError> {
        let w = self.weeks_per_month;
        if !w.is_finite() || w <= 4.0 || w >= 5.0 {
            return Err(CalcError::InvalidWeeksPerMonth(w));
        }
        let h = self.hours_per_day;
        if !h.is_finite() || h <= 0.0 {
            return Err(CalcError::InvalidHoursPerDay(h));
        }
        Ok(())
    }
}
