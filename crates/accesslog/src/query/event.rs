use std::collections::BTreeSet;

use crate::filter::{RecordFilter, Window};
use crate::parser::{Event, Status};
use crate::store::RecordStore;

impl RecordStore {
    pub fn number_of_all_events(&self, window: Window) -> usize {
        self.all_events(window).len()
    }

    pub fn all_events(&self, window: Window) -> BTreeSet<Event> {
        self.distinct(RecordFilter::new().window(window), |r| r.event())
    }

    pub fn events_for_ip(&self, ip: &str, window: Window) -> BTreeSet<Event> {
        self.distinct(RecordFilter::new().origin(ip).window(window), |r| r.event())
    }

    pub fn events_for_user(&self, user: &str, window: Window) -> BTreeSet<Event> {
        self.distinct(RecordFilter::new().actor(user).window(window), |r| r.event())
    }

    pub fn failed_events(&self, window: Window) -> BTreeSet<Event> {
        self.distinct(RecordFilter::new().outcome(Status::Failed).window(window), |r| r.event())
    }

    pub fn error_events(&self, window: Window) -> BTreeSet<Event> {
        self.distinct(RecordFilter::new().outcome(Status::Error).window(window), |r| r.event())
    }
}
