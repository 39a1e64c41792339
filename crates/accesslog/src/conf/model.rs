//! Model: AccessLogConfig and related types.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::parser::MAX_LINE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessLogConfig {
    /// Directory scanned (non-recursively) for log files
    pub log_dir: PathBuf,
    /// File extension, without the dot, matched case-insensitively
    pub extension: String,
    /// Lines longer than this are skipped
    pub max_line_size: usize,
    pub malformed_task_id: MalformedTaskIdPolicy,
}

/// What ingestion does with a task event whose id is not an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedTaskIdPolicy {
    /// Drop the line, like any other malformed line
    #[default]
    Skip,
    /// Stop ingestion with an error naming the file and line
    Abort,
}

impl MalformedTaskIdPolicy {
    /// Case-insensitive, matching the names used in the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "skip" => Some(Self::Skip),
            "abort" => Some(Self::Abort),
            _ => None,
        }
    }
}

impl Default for AccessLogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            extension: "log".to_string(),
            max_line_size: MAX_LINE_SIZE,
            malformed_task_id: MalformedTaskIdPolicy::Skip,
        }
    }
}
