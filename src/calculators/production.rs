//! PRODUCTION & INCOME
//!
//! One row per species harvested and sold. Harvest weights go through the
//! fresh/dried ratio row; the harvest frequency is annualized and multiplied
//! through to yearly volumes and sales income.

use crate::config::CalcConfig;
use crate::frequency::{annual_occurrences, describe, FrequencyCommand, FrequencySpec};
use crate::ratio::{RatioCommand, RatioState};
use crate::utils::non_negative;
use serde::{Deserialize, Deserializer, Serialize};

/// Which weight the harvest is sold by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleForm {
    Fresh,
    #[default]
    Dried,
}

/// Weights as entered on the form, replayed through the ratio row in
/// field order: fresh, then ratio, then dried
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeightEntry {
    #[serde(default)]
    pub fresh_kg: f64,
    #[serde(default)]
    pub ratio: Option<String>,
    #[serde(default)]
    pub dried_kg: Option<f64>,
}

impl WeightEntry {
    pub fn into_state(self) -> RatioState {
        let mut commands = vec![RatioCommand::SetFreshWeight(self.fresh_kg)];
        if let Some(text) = self.ratio {
            commands.push(RatioCommand::SetRatioInput(text));
        }
        if let Some(dried) = self.dried_kg {
            commands.push(RatioCommand::SetDriedWeight(dried));
        }
        commands.into_iter().fold(RatioState::new(), RatioState::apply)
    }
}

fn weights_from_entry<'de, D>(deserializer: D) -> Result<RatioState, D::Error>
where
    D: Deserializer<'de>,
{
    WeightEntry::deserialize(deserializer).map(WeightEntry::into_state)
}

/// Species row on the production form
#[derive(Debug, Clone, Deserialize)]
pub struct ProductionRow {
    pub species: String,
    #[serde(default)]
    pub frequency: FrequencySpec,
    #[serde(deserialize_with = "weights_from_entry")]
    pub weights: RatioState,
    /// Price per kg of the weight the harvest is sold by
    #[serde(default)]
    pub price_per_kg: f64,
    #[serde(default)]
    pub sold_as: SaleForm,
}

impl ProductionRow {
    pub fn new(species: &str, frequency: FrequencySpec, weights: RatioState, price_per_kg: f64) -> Self {
        Self {
            species: species.to_string(),
            frequency,
            weights,
            price_per_kg: non_negative(price_per_kg),
            sold_as: SaleForm::default(),
        }
    }

    pub fn with_sale_form(self, sold_as: SaleForm) -> Self {
        Self { sold_as, ..self }
    }

    pub fn edit_weights(self, command: RatioCommand) -> Self {
        Self { weights: self.weights.apply(command), ..self }
    }

    pub fn edit_frequency(self, command: FrequencyCommand) -> Self {
        Self { frequency: self.frequency.apply(command), ..self }
    }
}

/// Derived figures for one production row
#[derive(Debug, Clone, Serialize)]
pub struct ProductionResult {
    pub species: String,
    pub frequency: String,
    pub annual_occurrences: f64,
    pub fresh_kg: f64,
    pub dried_kg: f64,
    /// "7:1" or "N/A"
    pub ratio: String,
    pub annual_fresh_kg: f64,
    pub annual_dried_kg: f64,
    pub annual_income: f64,
}

/// Annualize one production row
pub fn calculate_production(row: &ProductionRow, config: &CalcConfig) -> ProductionResult {
    let occurrences = annual_occurrences(&row.frequency, config);
    let fresh = row.weights.fresh_weight();
    let dried = row.weights.dried_weight();

    let sold_kg = match row.sold_as {
        SaleForm::Fresh => fresh,
        SaleForm::Dried => dried,
    };

    ProductionResult {
        species: row.species.clone(),
        frequency: describe(&row.frequency),
        annual_occurrences: occurrences,
        fresh_kg: fresh,
        dried_kg: dried,
        ratio: row.weights.ratio().display(),
        annual_fresh_kg: occurrences * fresh,
        annual_dried_kg: occurrences * dried,
        annual_income: occurrences * sold_kg * non_negative(row.price_per_kg),
    }
}
