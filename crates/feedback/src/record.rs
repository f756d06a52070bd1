use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{FeedbackError, FeedbackResult};

/// Which recommendation mode produced the recipe being rated.
#[derive(
    EnumString,
    Display,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum FeedbackSource {
    Collaborative,
    #[strum(serialize = "Content-Based")]
    #[serde(rename = "Content-Based")]
    ContentBased,
    Hybrid,
    #[strum(serialize = "AI")]
    #[serde(rename = "AI")]
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub user_id: i64,
    pub recipe_title: String,
    pub rating: u8,
    pub source: FeedbackSource,
}

impl FeedbackRecord {
    pub fn new(
        user_id: i64,
        recipe_title: impl Into<String>,
        rating: u8,
        source: FeedbackSource,
    ) -> FeedbackResult<Self> {
        let record = Self {
            user_id,
            recipe_title: recipe_title.into(),
            rating,
            source,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> FeedbackResult<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(FeedbackError::InvalidRating(self.rating));
        }
        if self.recipe_title.trim().is_empty() {
            return Err(FeedbackError::EmptyTitle);
        }
        Ok(())
    }
}
