//! ACTIVITY SCHEDULE
//!
//! Farming activities (planting, monitoring, harvesting, drying) with how
//! often they happen, how long each takes and how many people do it.

use crate::config::CalcConfig;
use crate::frequency::{annual_occurrences, describe, FrequencySpec};
use crate::utils::non_negative;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityRow {
    pub name: String,
    #[serde(default)]
    pub frequency: FrequencySpec,
    #[serde(default)]
    pub hours_per_occurrence: f64,
    #[serde(default = "default_workers")]
    pub workers: u32,
}

fn default_workers() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityResult {
    pub name: String,
    pub frequency: String,
    pub annual_occurrences: f64,
    pub annual_hours: f64,
    pub person_days: f64,
}

pub fn calculate_activity(row: &ActivityRow, config: &CalcConfig) -> ActivityResult {
    let occurrences = annual_occurrences(&row.frequency, config);
    let annual_hours =
        occurrences * non_negative(row.hours_per_occurrence) * f64::from(row.workers);

    ActivityResult {
        name: row.name.clone(),
        frequency: describe(&row.frequency),
        annual_occurrences: occurrences,
        annual_hours,
        // hours_per_day > 0 is enforced by CalcConfig::validate
        person_days: annual_hours / config.hours_per_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weekly_activity() {
        let row = ActivityRow {
            name: "Line monitoring".to_string(),
            frequency: FrequencySpec::per_week(1, 12),
            hours_per_occurrence: 2.0,
            workers: 2,
        };
        let result = calculate_activity(&row, &CalcConfig::default());
        assert_relative_eq!(result.annual_hours, 208.0, epsilon = 1e-9);
        assert_relative_eq!(result.person_days, 26.0, epsilon = 1e-9);
        assert_eq!(result.frequency, "1 time(s)/week for 12 mos");
    }

    #[test]
    fn test_defaults_from_json() {
        let row: ActivityRow = serde_json::from_str(r#"{ "name": "Seedling prep" }"#).unwrap();
        assert_eq!(row.workers, 1);
        let result = calculate_activity(&row, &CalcConfig::default());
        assert_eq!(result.annual_occurrences, 1.0);
        assert_eq!(result.annual_hours, 0.0);
    }
}
