use std::collections::BTreeSet;

use smartrecipe_catalog::Recipe;

use crate::ingredients::{IngredientParse, normalize_token, split_ingredients};

/// Sorted, deduplicated ingredient tokens across the catalog, taken by a
/// plain comma split of each recipe's ingredient text. Feeds
/// ingredient selection lists only; the vector space keeps its own
/// dictionary.
pub fn build_vocabulary(recipes: &[Recipe]) -> Vec<String> {
    let mut tokens = BTreeSet::new();

    for recipe in recipes {
        match split_ingredients(&recipe.ingredients) {
            IngredientParse::Parsed(items) => {
                tokens.extend(
                    items
                        .iter()
                        .map(|item| normalize_token(item))
                        .filter(|item| !item.is_empty()),
                );
            }
            IngredientParse::Unparsable => {
                tracing::debug!(
                    recipe_id = recipe.recipe_id,
                    "Skipping recipe with unparsable ingredients"
                );
            }
        }
    }

    tokens.into_iter().collect()
}
