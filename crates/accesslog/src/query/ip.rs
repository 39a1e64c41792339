use std::collections::BTreeSet;

use crate::filter::{RecordFilter, Window};
use crate::parser::{Event, Status};
use crate::store::RecordStore;

impl RecordStore {
    pub fn number_of_unique_ips(&self, window: Window) -> usize {
        self.unique_ips(window).len()
    }

    pub fn unique_ips(&self, window: Window) -> BTreeSet<String> {
        self.distinct(RecordFilter::new().window(window), |r| r.origin().to_string())
    }

    pub fn ips_for_user(&self, user: &str, window: Window) -> BTreeSet<String> {
        self.distinct(RecordFilter::new().actor(user).window(window), |r| r.origin().to_string())
    }

    pub fn ips_for_event(&self, event: Event, window: Window) -> BTreeSet<String> {
        self.distinct(RecordFilter::new().event(event).window(window), |r| r.origin().to_string())
    }

    pub fn ips_for_status(&self, status: Status, window: Window) -> BTreeSet<String> {
        self.distinct(RecordFilter::new().outcome(status).window(window), |r| r.origin().to_string())
    }
}
