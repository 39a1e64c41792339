use chrono::NaiveDateTime;

use super::predicate;
use super::window::Window;
use crate::parser::{Event, Record, Status};

/// AND-composition of the predicates in [`predicate`].
///
/// Every criterion left unset accepts all records. Built fluently:
///
/// ```
/// use accesslog::filter::{RecordFilter, Window};
/// use accesslog::parser::Event;
///
/// let filter = RecordFilter::new()
///     .actor("Amigo")
///     .event(Event::Login)
///     .window(Window::UNBOUNDED);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFilter<'a> {
    origin: Option<&'a str>,
    actor: Option<&'a str>,
    event: Option<Event>,
    outcome: Option<Status>,
    task: Option<i32>,
    at: Option<NaiveDateTime>,
    window: Option<Window>,
}

impl<'a> RecordFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: &'a str) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn actor(mut self, actor: &'a str) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn event(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    pub fn outcome(mut self, outcome: Status) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn task(mut self, task: i32) -> Self {
        self.task = Some(task);
        self
    }

    pub fn at(mut self, timestamp: NaiveDateTime) -> Self {
        self.at = Some(timestamp);
        self
    }

    pub fn window(mut self, window: Window) -> Self {
        self.window = Some(window);
        self
    }

    #[inline]
    pub fn matches(&self, record: &Record) -> bool {
        self.origin.map_or(true, |o| predicate::origin_is(record, o))
            && self.actor.map_or(true, |a| predicate::actor_is(record, a))
            && self.event.map_or(true, |e| predicate::event_is(record, e))
            && self.outcome.map_or(true, |s| predicate::outcome_is(record, s))
            && self.task.map_or(true, |t| predicate::task_is(record, t))
            && self.at.map_or(true, |ts| predicate::timestamp_is(record, ts))
            && self.window.map_or(true, |w| predicate::in_window(record, &w))
    }
}
