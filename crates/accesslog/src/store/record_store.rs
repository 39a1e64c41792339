use tracing::info;

use super::ingest::{IngestError, Ingestor};
use super::stats::IngestStats;
use crate::conf::AccessLogConfig;
use crate::filter::RecordFilter;
use crate::parser::{LineDecoder, Record, TabLineDecoder};

/// All records decoded at startup, in file-then-line order.
///
/// The store has no mutation API once built. Query results are owned copies.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Decode `lines` with the default decoder, dropping any line that fails.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let decoder = TabLineDecoder::default();
        let records = lines
            .into_iter()
            .filter_map(|line| decoder.decode(line.as_ref()).ok())
            .collect();
        Self { records }
    }

    /// Build the store from every log file in `config.log_dir`.
    pub fn load(config: &AccessLogConfig) -> Result<(Self, IngestStats), IngestError> {
        let mut ingestor = Ingestor::from_config(config);
        ingestor.ingest_dir(&config.log_dir, &config.suffix())?;
        let (store, stats) = ingestor.finish();

        info!(
            files = stats.files_read,
            failed = stats.files_failed,
            records = stats.records_stored,
            skipped = stats.lines_skipped(),
            "Ingestion complete"
        );
        Ok((store, stats))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Records accepted by `filter`, in store order.
    pub fn select<'s>(&'s self, filter: RecordFilter<'s>) -> impl Iterator<Item = &'s Record> + 's {
        self.records.iter().filter(move |record| filter.matches(record))
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
