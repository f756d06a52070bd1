use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Catalog, Rating, Recipe};

/// Load both catalog tables. Any missing file or malformed row fails the
/// whole load: the engine must not be built from partial data.
pub fn load_catalog(
    ratings_path: impl AsRef<Path>,
    recipes_path: impl AsRef<Path>,
) -> CatalogResult<Catalog> {
    let ratings = load_ratings(ratings_path)?;
    let recipes = load_recipes(recipes_path)?;

    tracing::info!(
        ratings = ratings.len(),
        recipes = recipes.len(),
        "Catalog loaded"
    );

    Ok(Catalog::new(ratings, recipes))
}

pub fn load_ratings(path: impl AsRef<Path>) -> CatalogResult<Vec<Rating>> {
    let ratings: Vec<Rating> = read_table(path.as_ref())?;

    if let Some(bad) = ratings.iter().find(|r| !r.is_valid()) {
        return Err(CatalogError::InvalidRating {
            user_id: bad.user_id,
            recipe_id: bad.recipe_id,
            rating: bad.rating,
        });
    }

    Ok(ratings)
}

pub fn load_recipes(path: impl AsRef<Path>) -> CatalogResult<Vec<Recipe>> {
    read_table(path.as_ref())
}

fn read_table<T: DeserializeOwned>(path: &Path) -> CatalogResult<Vec<T>> {
    let display = path.display().to_string();
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: display.clone(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| CatalogError::Csv {
            path: display,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    #[test]
    fn test_load_recipes_with_both_ingredient_encodings() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("recipes.csv");
        std::fs::write(
            &path,
            "recipe_id,title,cuisine,ingredients\n\
             1,Fried Rice,Chinese,\"rice, egg, scallion\"\n\
             2,Pesto,Italian,\"['basil', 'pine nuts', 'olive oil']\"\n",
        )
        .unwrap();

        let recipes = load_recipes(&path).unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].ingredients, "rice, egg, scallion");
        assert_eq!(recipes[1].ingredients, "['basil', 'pine nuts', 'olive oil']");
    }

    #[test]
    fn test_load_ratings_ignores_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("ratings.csv");
        std::fs::write(
            &path,
            "user_id,recipe_id,rating,timestamp\n1,10,5,2024-01-01\n2,10,3.5,2024-01-02\n",
        )
        .unwrap();

        let ratings = load_ratings(&path).unwrap();

        assert_eq!(ratings, vec![Rating::new(1, 10, 5.0), Rating::new(2, 10, 3.5)]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();

        let result = load_ratings(dir.child("nope.csv"));

        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_non_numeric_rating_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("ratings.csv");
        std::fs::write(&path, "user_id,recipe_id,rating\n1,10,great\n").unwrap();

        let result = load_ratings(&path);

        assert!(matches!(result, Err(CatalogError::Csv { .. })));
    }

    #[test]
    fn test_recipes_without_ingredients_column_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("recipes.csv");
        std::fs::write(&path, "recipe_id,title,cuisine\n1,Fried Rice,Chinese\n").unwrap();

        let result = load_recipes(&path);

        assert!(matches!(result, Err(CatalogError::Csv { .. })));
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("ratings.csv");
        std::fs::write(&path, "user_id,recipe_id,rating\n1,10,9\n").unwrap();

        let result = load_ratings(&path);

        assert!(matches!(
            result,
            Err(CatalogError::InvalidRating { user_id: 1, recipe_id: 10, .. })
        ));
    }
}
