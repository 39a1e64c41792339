//! Stateless predicates over a single record.

use chrono::NaiveDateTime;

use super::window::Window;
use crate::parser::{Event, Record, Status};

#[inline]
pub fn in_window(record: &Record, window: &Window) -> bool {
    window.contains(record.timestamp())
}

#[inline]
pub fn origin_is(record: &Record, origin: &str) -> bool {
    record.origin() == origin
}

#[inline]
pub fn actor_is(record: &Record, actor: &str) -> bool {
    record.actor() == actor
}

#[inline]
pub fn event_is(record: &Record, event: Event) -> bool {
    record.event() == event
}

#[inline]
pub fn outcome_is(record: &Record, outcome: Status) -> bool {
    record.outcome() == outcome
}

/// Exact second-level match. A record without a timestamp never matches.
#[inline]
pub fn timestamp_is(record: &Record, timestamp: NaiveDateTime) -> bool {
    record.timestamp() == Some(timestamp)
}

#[inline]
pub fn task_is(record: &Record, task: i32) -> bool {
    record.task_id() == Some(task)
}
