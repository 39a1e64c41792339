use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::filter::Window;
use crate::parser::date::format_timestamp;
use crate::parser::{Event, Status};

/// A record attribute named in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Ip,
    User,
    Date,
    Event,
    Status,
}

impl Selector {
    pub fn from_keyword(word: &str) -> Option<Selector> {
        match word {
            "ip" => Some(Selector::Ip),
            "user" => Some(Selector::User),
            "date" => Some(Selector::Date),
            "event" => Some(Selector::Event),
            "status" => Some(Selector::Status),
            _ => None,
        }
    }
}

/// The `for <selector> = "<value>"` clause with its literal already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Ip(String),
    User(String),
    /// Exact second-level match
    Date(NaiveDateTime),
    Event(Event),
    Status(Status),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryIntent {
    pub select: Selector,
    pub condition: Option<Condition>,
    /// From `and date between "<after>" and "<before>"`; exclusive on both ends
    pub window: Option<Window>,
}

/// Query output; the element type follows the selected attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryResult {
    /// `ip` and `user` selections
    Strings(BTreeSet<String>),
    Dates(BTreeSet<NaiveDateTime>),
    Events(BTreeSet<Event>),
    Statuses(BTreeSet<Status>),
}

impl QueryResult {
    pub fn len(&self) -> usize {
        match self {
            QueryResult::Strings(set) => set.len(),
            QueryResult::Dates(set) => set.len(),
            QueryResult::Events(set) => set.len(),
            QueryResult::Statuses(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Each element rendered the way it appears in log lines.
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            QueryResult::Strings(set) => set.iter().cloned().collect(),
            QueryResult::Dates(set) => set.iter().map(format_timestamp).collect(),
            QueryResult::Events(set) => set.iter().map(Event::to_string).collect(),
            QueryResult::Statuses(set) => set.iter().map(Status::to_string).collect(),
        }
    }
}

/// Renders as `[a, b, c]`.
impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_strings().join(", "))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Empty query")]
    Empty,

    #[error("Unterminated quoted literal starting at offset {offset}")]
    UnterminatedLiteral { offset: usize },

    #[error("Expected {expected} at offset {offset}, found {found:?}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("Expected {expected}, found end of query")]
    UnexpectedEnd { expected: &'static str },

    #[error("Unknown selector {found:?} at offset {offset} (expected ip, user, date, event or status)")]
    UnknownSelector { found: String, offset: usize },

    #[error("Invalid date literal {0:?} (expected d.M.yyyy H:m:s)")]
    InvalidDate(String),

    #[error("Unknown event {0:?}")]
    UnknownEvent(String),

    #[error("Unknown status {0:?}")]
    UnknownStatus(String),
}
