//! Survey Summary - combines every form of one household survey
//!
//! Production income joins the other household earning sources, so the
//! summary can report what share of household earnings comes from farming,
//! and nets the yearly equipment depreciation off production income.

use crate::calculators::*;
use crate::config::CalcConfig;
use crate::error::CalcError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Earning-source label under which production income is reported
pub const PRODUCTION_SOURCE_LABEL: &str = "Production sales";

/// One household survey as exported by the forms
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyInput {
    pub name: String,
    #[serde(default)]
    pub production: Vec<ProductionRow>,
    #[serde(default)]
    pub activities: Vec<ActivityRow>,
    #[serde(default)]
    pub other_earnings: Vec<EarningSource>,
    #[serde(default)]
    pub investments: Vec<InvestmentItem>,
}

impl SurveyInput {
    /// Load a survey from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read survey file: {:?}", path))?;

        let survey: SurveyInput = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse survey JSON: {:?}", path))?;

        tracing::info!(
            "Loaded survey '{}' ({} production rows, {} activities, {} earning sources, {} investments)",
            survey.name,
            survey.production.len(),
            survey.activities.len(),
            survey.other_earnings.len(),
            survey.investments.len()
        );

        Ok(survey)
    }

    fn is_empty(&self) -> bool {
        self.production.is_empty()
            && self.activities.is_empty()
            && self.other_earnings.is_empty()
            && self.investments.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveySummary {
    pub name: String,
    pub production: Vec<ProductionResult>,
    pub activities: Vec<ActivityResult>,
    pub household: HouseholdSummary,
    pub depreciation: DepreciationSummary,
    pub production_income: f64,
    /// Production income as a percentage of total household earnings
    pub production_income_share: f64,
    pub total_person_days: f64,
    /// Production income minus annual depreciation
    pub net_production_income: f64,
}

/// Run every calculator over a survey
pub fn summarize(survey: &SurveyInput, config: &CalcConfig) -> Result<SurveySummary, CalcError> {
    if survey.is_empty() {
        return Err(CalcError::EmptySurvey { survey: survey.name.clone() });
    }

    let production: Vec<ProductionResult> = survey
        .production
        .iter()
        .map(|row| calculate_production(row, config))
        .collect();
    let production_income: f64 = production.iter().map(|r| r.annual_income).sum();

    let activities: Vec<ActivityResult> = survey
        .activities
        .iter()
        .map(|row| calculate_activity(row, config))
        .collect();
    let total_person_days: f64 = activities.iter().map(|r| r.person_days).sum();

    let mut sources = survey.other_earnings.clone();
    if !survey.production.is_empty() {
        sources.push(EarningSource::new(PRODUCTION_SOURCE_LABEL, production_income));
    }
    let household = calculate_household_earnings(&sources);

    let depreciation = calculate_depreciation(&survey.investments);

    tracing::debug!(
        "Survey '{}': production income {:.2}, household total {:.2}, depreciation {:.2}",
        survey.name,
        production_income,
        household.total,
        depreciation.total_annual
    );

    Ok(SurveySummary {
        name: survey.name.clone(),
        production_income_share: percent_of(production_income, household.total),
        net_production_income: production_income - depreciation.total_annual,
        production,
        activities,
        household,
        depreciation,
        production_income,
        total_person_days,
    })
}
