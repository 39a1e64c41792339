//! Runtime module: process lifecycle: logging, config, ingestion, output.

pub mod boot;
pub mod report;
