//! Ingest: feeds line sources through a decoder into a record store.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::discover::discover_log_files;
use super::record_store::RecordStore;
use super::stats::IngestStats;
use crate::conf::{AccessLogConfig, MalformedTaskIdPolicy};
use crate::parser::{DecodeError, LineDecoder, Record, TabLineDecoder};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("{file}:{line}: invalid task id in event field {text:?}")]
    MalformedTaskId { file: String, line: u64, text: String },
}

pub struct Ingestor<D: LineDecoder = TabLineDecoder> {
    decoder: D,
    policy: MalformedTaskIdPolicy,
    records: Vec<Record>,
    stats: IngestStats,
}

impl Ingestor<TabLineDecoder> {
    pub fn from_config(config: &AccessLogConfig) -> Self {
        Self::new(TabLineDecoder::new(config.max_line_size), config.malformed_task_id)
    }
}

impl<D: LineDecoder> Ingestor<D> {
    pub fn new(decoder: D, policy: MalformedTaskIdPolicy) -> Self {
        Self {
            decoder,
            policy,
            records: Vec::new(),
            stats: IngestStats::default(),
        }
    }

    /// Ingest every discovered log file under the configured directory.
    ///
    /// A directory that cannot be listed yields an empty store; only the
    /// `abort` task-id policy turns a bad line into an error.
    pub fn ingest_dir(&mut self, dir: &Path, suffix: &str) -> Result<(), IngestError> {
        let files = match discover_log_files(dir, suffix) {
            Ok(files) => files,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Failed to list log directory");
                return Ok(());
            }
        };

        info!(dir = %dir.display(), files = files.len(), "Discovered log files");
        for path in files {
            self.ingest_file(&path)?;
        }
        Ok(())
    }

    pub fn ingest_file(&mut self, path: &Path) -> Result<(), IngestError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Failed to open log file");
                self.stats.files_failed += 1;
                return Ok(());
            }
        };

        debug!(file = %path.display(), "Reading log file");
        self.ingest_reader(&path.display().to_string(), BufReader::new(file))
    }

    /// Ingest one line source. A line ends at `\n`, `\r\n`, or a lone `\r`;
    /// invalid UTF-8 is replaced rather than rejected.
    pub fn ingest_reader<R: BufRead>(&mut self, name: &str, mut reader: R) -> Result<(), IngestError> {
        let mut buf = Vec::new();
        let mut line_no = 0u64;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let chunk = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
                    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
                    for segment in chunk.split(|&b| b == b'\r') {
                        line_no += 1;
                        let line = String::from_utf8_lossy(segment);
                        self.ingest_line(name, line_no, &line)?;
                    }
                }
                Err(e) => {
                    // Keep what was read so far.
                    warn!(file = name, line = line_no, error = %e, "Failed reading log file");
                    self.stats.files_failed += 1;
                    return Ok(());
                }
            }
        }

        self.stats.files_read += 1;
        Ok(())
    }

    pub fn ingest_line(&mut self, name: &str, line_no: u64, line: &str) -> Result<(), IngestError> {
        self.stats.lines_read += 1;

        match self.decoder.decode(line) {
            Ok(record) => {
                self.records.push(record);
                self.stats.records_stored += 1;
            }
            Err(DecodeError::MalformedTaskId(text)) if self.policy == MalformedTaskIdPolicy::Abort => {
                return Err(IngestError::MalformedTaskId {
                    file: name.to_string(),
                    line: line_no,
                    text,
                });
            }
            Err(e) => {
                debug!(file = name, line = line_no, error = %e, "Skipping malformed line");
                self.stats.record_skip(&e);
            }
        }
        Ok(())
    }

    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    pub fn finish(self) -> (RecordStore, IngestStats) {
        (RecordStore::from_records(self.records), self.stats)
    }
}
