//! Fixed timestamp format shared by log lines and query literals.

use chrono::NaiveDateTime;

/// `d.M.yyyy H:m:s`; chrono accepts single-digit components when parsing.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Unpadded rendering so a decoded line re-serializes the way it is usually written.
const DISPLAY_FORMAT: &str = "%-d.%-m.%Y %-H:%-M:%-S";

pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).ok()
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DISPLAY_FORMAT).to_string()
}
