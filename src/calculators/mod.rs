//! Per-form calculators
//!
//! Each form gets its own module: rows in, derived figures out.

pub mod production;
pub mod schedule;
pub mod household;
pub mod depreciation;

pub use production::{calculate_production, ProductionResult, ProductionRow, SaleForm, WeightEntry};
pub use schedule::{calculate_activity, ActivityResult, ActivityRow};
pub use household::{calculate_household_earnings, percent_of, EarningShare, EarningSource, HouseholdSummary};
pub use depreciation::{
    calculate_depreciation, calculate_item_depreciation, DepreciationResult, DepreciationSummary,
    InvestmentItem,
};
