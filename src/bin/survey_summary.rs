// Survey Summary CLI
//
// Purpose: Run every calculator over one exported survey and print the summary
// Usage: cargo run --bin survey_summary -- path/to/survey.json

use anyhow::Context;
use std::path::{Path, PathBuf};
use survey_calc::{summarize, CalcConfig, SurveyInput};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "survey_calc=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let survey_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: survey_summary <survey.json>")?;

    // Configuration from environment variables
    let config = match std::env::var("SURVEY_CONFIG") {
        Ok(path) => CalcConfig::load(Path::new(&path))?,
        Err(_) => {
            tracing::info!("SURVEY_CONFIG not set - using default constants");
            CalcConfig::default()
        }
    };

    let survey = SurveyInput::load(&survey_path)?;
    let summary = summarize(&survey, &config)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);

    tracing::info!(
        "Summarized '{}': production income {:.2} ({:.1}% of household earnings)",
        summary.name,
        summary.production_income,
        summary.production_income_share
    );

    Ok(())
}
