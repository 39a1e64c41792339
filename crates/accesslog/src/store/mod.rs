//! Store module: log discovery, ingestion, and the read-only record store.
//!
//! Ingestion is one-shot and best-effort: unreadable files are reported
//! through `tracing` and skipped, malformed lines are counted and dropped.

pub mod discover;
pub mod ingest;
pub mod record_store;
pub mod stats;

pub use discover::discover_log_files;
pub use ingest::{IngestError, Ingestor};
pub use record_store::RecordStore;
pub use stats::IngestStats;
