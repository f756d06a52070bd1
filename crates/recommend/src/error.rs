use thiserror::Error;

pub type RecommendResult<T> = Result<T, RecommendError>;

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Recipe catalog is empty")]
    EmptyCatalog,

    #[error("Empty ingredient vocabulary: recipe ingredients contain only stop words")]
    EmptyVocabulary,
}
