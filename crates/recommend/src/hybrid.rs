use smartrecipe_catalog::RecipeSummary;

use crate::ingredients::{IngredientParse, parse_ingredients};

/// Number of collaborative picks that seed a hybrid query, independent of
/// how many results the caller asked for.
pub const HYBRID_SEED_COUNT: usize = 5;

/// Flatten the ingredient tokens of every seed recipe into one multiset.
/// Recipes whose ingredients cannot be parsed contribute nothing.
pub fn seed_tokens(seeds: &[RecipeSummary]) -> Vec<String> {
    let mut tokens = Vec::new();

    for seed in seeds {
        match parse_ingredients(&seed.ingredients) {
            IngredientParse::Parsed(items) => tokens.extend(items),
            IngredientParse::Unparsable => {
                tracing::debug!(
                    title = %seed.title,
                    "Skipping hybrid seed with unparsable ingredients"
                );
            }
        }
    }

    tokens
}
