use serde::Serialize;

use crate::parser::DecodeError;

/// Counters collected during one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub files_read: u64,
    /// Files that could not be opened or failed mid-read
    pub files_failed: u64,
    pub lines_read: u64,
    pub records_stored: u64,
    pub skipped_field_count: u64,
    pub skipped_too_large: u64,
    pub skipped_task_id: u64,
}

impl IngestStats {
    pub fn record_skip(&mut self, error: &DecodeError) {
        match error {
            DecodeError::FieldCount { .. } => self.skipped_field_count += 1,
            DecodeError::LineTooLarge(..) => self.skipped_too_large += 1,
            DecodeError::MalformedTaskId(_) => self.skipped_task_id += 1,
        }
    }

    pub fn lines_skipped(&self) -> u64 {
        self.skipped_field_count + self.skipped_too_large + self.skipped_task_id
    }
}
