use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::FeedbackResult;
use crate::record::FeedbackRecord;

/// Append-only destination for feedback records.
pub trait FeedbackSink: Send + Sync {
    fn submit(&self, record: &FeedbackRecord) -> FeedbackResult<()>;
}

/// Feedback log stored as a CSV file with the header
/// `user_id,recipe_title,rating,source`.
///
/// Every submit reads the whole log, appends the record and rewrites the
/// file. There is no isolation between concurrent writers: the last writer
/// wins.
#[derive(Debug, Clone)]
pub struct CsvFeedbackLog {
    path: PathBuf,
}

impl CsvFeedbackLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records currently in the log. A missing log is an empty log.
    pub fn records(&self) -> FeedbackResult<Vec<FeedbackRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(file);
        let records = reader
            .deserialize()
            .collect::<Result<Vec<FeedbackRecord>, _>>()?;
        Ok(records)
    }
}

impl FeedbackSink for CsvFeedbackLog {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn submit(&self, record: &FeedbackRecord) -> FeedbackResult<()> {
        record.validate()?;

        let mut records = self.records()?;
        if records.is_empty() {
            tracing::info!("Creating feedback log");
        }
        records.push(record.clone());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        for entry in &records {
            writer.serialize(entry)?;
        }
        writer.flush()?;

        tracing::debug!(total = records.len(), "Feedback recorded");
        Ok(())
    }
}
