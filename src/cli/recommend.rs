use anyhow::Result;
use clap::Subcommand;
use serde_json::json;

use crate::config::Config;
use crate::routes::{RecommendationsResponse, UsersResponse, VocabularyResponse};

#[derive(Subcommand)]
pub enum Mode {
    /// Recipes liked by similar users
    Collaborative {
        #[arg(long)]
        user: i64,
        #[arg(short, long)]
        n: Option<usize>,
    },
    /// Recipes matching a set of ingredients
    Content {
        /// Ingredient to match (repeatable)
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<String>,
        #[arg(short, long)]
        n: Option<usize>,
    },
    /// Content search seeded by collaborative picks
    Hybrid {
        #[arg(long)]
        user: i64,
        #[arg(short, long)]
        n: Option<usize>,
    },
}

pub fn recommend(config: Config, mode: Mode) -> Result<()> {
    let engine = super::load_engine(&config)?;
    let default_count = config.recommend.default_count;

    let recipes = match mode {
        Mode::Collaborative { user, n } => engine.recommend_cf(user, n.unwrap_or(default_count)),
        Mode::Content { ingredients, n } => {
            engine.recommend_content(ingredients.as_slice(), n.unwrap_or(default_count))
        }
        Mode::Hybrid { user, n } => engine.recommend_hybrid(user, n.unwrap_or(default_count)),
    };

    if recipes.is_empty() {
        tracing::warn!("No recommendation available");
    }

    super::print_json(&RecommendationsResponse::from(recipes))
}

pub fn users(config: Config) -> Result<()> {
    let engine = super::load_engine(&config)?;
    super::print_json(&UsersResponse {
        users: engine.user_ids().to_vec(),
    })
}

pub fn vocabulary(config: Config) -> Result<()> {
    let engine = super::load_engine(&config)?;
    super::print_json(&VocabularyResponse {
        ingredients: engine.vocabulary().to_vec(),
    })
}

pub fn summary(config: Config) -> Result<()> {
    let engine = super::load_engine(&config)?;
    super::print_json(&json!({
        "users": engine.matrix().n_users(),
        "rated_recipes": engine.matrix().n_recipes(),
        "recipes": engine.catalog().recipes.len(),
        "terms": engine.vector_space().n_terms(),
        "vocabulary": engine.vocabulary().len(),
    }))
}
