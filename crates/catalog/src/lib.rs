pub mod error;
pub mod loader;
pub mod types;

pub use error::{CatalogError, CatalogResult};
pub use loader::{load_catalog, load_ratings, load_recipes};
pub use types::{Catalog, Rating, Recipe, RecipeSummary};
