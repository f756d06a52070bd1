use serde::{Deserialize, Serialize};

/// One row of the ratings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: i64,
    pub recipe_id: i64,
    pub rating: f64,
}

impl Rating {
    pub fn new(user_id: i64, recipe_id: i64, rating: f64) -> Self {
        Self {
            user_id,
            recipe_id,
            rating,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.rating.is_finite() && (1.0..=5.0).contains(&self.rating)
    }
}

/// One row of the recipes table.
///
/// `ingredients` is kept as raw text: either a serialized list literal
/// (`['rice', 'garlic']`) or a comma-separated string (`rice, garlic`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_id: i64,
    pub title: String,
    pub cuisine: String,
    pub ingredients: String,
}

impl Recipe {
    pub fn new(
        recipe_id: i64,
        title: impl Into<String>,
        cuisine: impl Into<String>,
        ingredients: impl Into<String>,
    ) -> Self {
        Self {
            recipe_id,
            title: title.into(),
            cuisine: cuisine.into(),
            ingredients: ingredients.into(),
        }
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary::from(self)
    }
}

/// What a recommendation call hands back for each recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub title: String,
    pub cuisine: String,
    pub ingredients: String,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            cuisine: recipe.cuisine.clone(),
            ingredients: recipe.ingredients.clone(),
        }
    }
}

/// In-memory snapshot of both catalog tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub ratings: Vec<Rating>,
    pub recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(ratings: Vec<Rating>, recipes: Vec<Recipe>) -> Self {
        Self { ratings, recipes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_range() {
        assert!(Rating::new(1, 10, 1.0).is_valid());
        assert!(Rating::new(1, 10, 5.0).is_valid());
        assert!(Rating::new(1, 10, 3.5).is_valid());
        assert!(!Rating::new(1, 10, 0.0).is_valid());
        assert!(!Rating::new(1, 10, 5.5).is_valid());
        assert!(!Rating::new(1, 10, f64::NAN).is_valid());
    }

    #[test]
    fn test_summary_copies_metadata() {
        let recipe = Recipe::new(7, "Fried Rice", "Chinese", "rice, egg, scallion");
        let summary = recipe.summary();

        assert_eq!(summary.title, "Fried Rice");
        assert_eq!(summary.cuisine, "Chinese");
        assert_eq!(summary.ingredients, "rice, egg, scallion");
    }
}
