use anyhow::Result;
use smartrecipe_feedback::{FeedbackRecord, FeedbackSink, FeedbackSource};

use crate::config::Config;

pub fn submit(
    config: Config,
    user_id: i64,
    title: String,
    rating: u8,
    source: FeedbackSource,
) -> Result<()> {
    let record = FeedbackRecord::new(user_id, title, rating, source)?;
    let log = super::feedback_log(&config);

    log.submit(&record)?;

    tracing::info!(path = %log.path().display(), "Feedback recorded");
    Ok(())
}
