use thiserror::Error;

pub type FeedbackResult<T> = Result<T, FeedbackError>;

#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error("Invalid rating {0}: must be between 1 and 5")]
    InvalidRating(u8),

    #[error("Recipe title must not be empty")]
    EmptyTitle,

    #[error("Feedback log I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Feedback log is malformed: {0}")]
    Csv(#[from] csv::Error),
}
