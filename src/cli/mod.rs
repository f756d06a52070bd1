use anyhow::{Context, Result};
use smartrecipe_catalog::load_catalog;
use smartrecipe_feedback::CsvFeedbackLog;
use smartrecipe_recommend::RecommendationEngine;

use crate::config::Config;

pub mod feedback;
pub mod recommend;
pub mod server;

/// Load the catalog and build every recommendation artifact. Missing or
/// malformed catalog files abort startup.
pub fn load_engine(config: &Config) -> Result<RecommendationEngine> {
    let catalog = load_catalog(&config.catalog.ratings_path, &config.catalog.recipes_path)
        .context("Failed to load recipe catalog")?;

    RecommendationEngine::new(catalog).context("Failed to build recommendation engine")
}

pub fn feedback_log(config: &Config) -> CsvFeedbackLog {
    CsvFeedbackLog::new(&config.feedback.path)
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
