pub mod error;
pub mod record;
pub mod sink;

pub use error::{FeedbackError, FeedbackResult};
pub use record::{FeedbackRecord, FeedbackSource};
pub use sink::{CsvFeedbackLog, FeedbackSink};
