use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed row in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid rating {rating} for user {user_id} on recipe {recipe_id}: must be between 1 and 5")]
    InvalidRating {
        user_id: i64,
        recipe_id: i64,
        rating: f64,
    },
}
