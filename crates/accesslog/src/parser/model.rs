use std::fmt;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::date::format_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    Login,
    DownloadPlugin,
    WriteMessage,
    /// Attempt at a task; the record carries the task id
    SolveTask,
    /// Completed task; the record carries the task id
    DoneTask,
    /// Event text that matched none of the names above
    Unknown,
}

/// Literal text for every recognized event.
const EVENT_NAMES: [(&str, Event); 5] = [
    ("LOGIN", Event::Login),
    ("DOWNLOAD_PLUGIN", Event::DownloadPlugin),
    ("WRITE_MESSAGE", Event::WriteMessage),
    ("SOLVE_TASK", Event::SolveTask),
    ("DONE_TASK", Event::DoneTask),
];

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Login => "LOGIN",
            Event::DownloadPlugin => "DOWNLOAD_PLUGIN",
            Event::WriteMessage => "WRITE_MESSAGE",
            Event::SolveTask => "SOLVE_TASK",
            Event::DoneTask => "DONE_TASK",
            Event::Unknown => "UNKNOWN",
        }
    }

    /// Exact, case-sensitive lookup. `Unknown` is never returned.
    pub fn from_name(name: &str) -> Option<Event> {
        EVENT_NAMES
            .iter()
            .find(|(literal, _)| *literal == name)
            .map(|(_, event)| *event)
    }

    pub fn is_task(&self) -> bool {
        matches!(self, Event::SolveTask | Event::DoneTask)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    Failed,
    Error,
    /// Outcome text that matched none of the names above
    Unknown,
}

const STATUS_NAMES: [(&str, Status); 3] = [
    ("OK", Status::Ok),
    ("FAILED", Status::Failed),
    ("ERROR", Status::Error),
];

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Failed => "FAILED",
            Status::Error => "ERROR",
            Status::Unknown => "UNKNOWN",
        }
    }

    /// Exact, case-sensitive lookup. `Unknown` is never returned.
    pub fn from_name(name: &str) -> Option<Status> {
        STATUS_NAMES
            .iter()
            .find(|(literal, _)| *literal == name)
            .map(|(_, status)| *status)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Expected {expected} tab-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Line too large: {0} bytes (max: {1} bytes)")]
    LineTooLarge(usize, usize),

    #[error("Invalid task id in event field: {0:?}")]
    MalformedTaskId(String),
}

/// One decoded access-log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    origin: String,
    actor: String,
    /// `None` when the timestamp text did not parse; such a record never
    /// matches a date window or an exact-date filter
    timestamp: Option<NaiveDateTime>,
    event: Event,
    /// Present only for task events
    task_id: Option<i32>,
    outcome: Status,
}

impl Record {
    pub fn new(
        origin: impl Into<String>,
        actor: impl Into<String>,
        timestamp: Option<NaiveDateTime>,
        event: Event,
        task_id: Option<i32>,
        outcome: Status,
    ) -> Self {
        Self {
            origin: origin.into(),
            actor: actor.into(),
            timestamp,
            event,
            task_id: task_id.filter(|_| event.is_task()),
            outcome,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    pub fn event(&self) -> Event {
        self.event
    }

    pub fn task_id(&self) -> Option<i32> {
        self.task_id
    }

    pub fn outcome(&self) -> Status {
        self.outcome
    }
}

/// Renders the record as a tab-delimited log line.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.timestamp.map(|ts| format_timestamp(&ts)).unwrap_or_default();
        write!(f, "{}\t{}\t{}\t{}", self.origin, self.actor, timestamp, self.event)?;
        if let Some(task) = self.task_id {
            write!(f, " {}", task)?;
        }
        write!(f, "\t{}", self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_name_exact() {
        assert_eq!(Event::from_name("LOGIN"), Some(Event::Login));
        assert_eq!(Event::from_name("DONE_TASK"), Some(Event::DoneTask));
        assert_eq!(Event::from_name("login"), None);
        assert_eq!(Event::from_name("UNKNOWN"), None);
    }

    #[test]
    fn test_event_names_round_trip() {
        for (literal, event) in EVENT_NAMES {
            assert_eq!(event.as_str(), literal);
        }
    }

    #[test]
    fn test_status_from_name_exact() {
        assert_eq!(Status::from_name("OK"), Some(Status::Ok));
        assert_eq!(Status::from_name("FAILED"), Some(Status::Failed));
        assert_eq!(Status::from_name("ERROR"), Some(Status::Error));
        assert_eq!(Status::from_name("Ok"), None);
        assert_eq!(Status::from_name("UNKNOWN"), None);
    }

    #[test]
    fn test_record_drops_task_id_for_non_task_event() {
        let record = Record::new("127.0.0.1", "Amigo", None, Event::Login, Some(3), Status::Ok);
        assert_eq!(record.task_id(), None);

        let record = Record::new("127.0.0.1", "Amigo", None, Event::SolveTask, Some(3), Status::Ok);
        assert_eq!(record.task_id(), Some(3));
    }

    #[test]
    fn test_event_serializes_as_literal() {
        let json = serde_json::to_string(&Event::DownloadPlugin).unwrap();
        assert_eq!(json, "\"DOWNLOAD_PLUGIN\"");
        let json = serde_json::to_string(&Status::Failed).unwrap();
        assert_eq!(json, "\"FAILED\"");
    }
}
