//! Query module: the fixed catalog of aggregation queries over a [`RecordStore`].
//!
//! Every method takes a [`Window`](crate::filter::Window); pass
//! `Window::UNBOUNDED` for "all time". Methods named `number_of_*` count
//! distinct values, except the attempt counters in `task.rs`, which count
//! raw matching records.

mod date;
mod event;
mod ip;
mod task;
mod user;

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::filter::RecordFilter;
use crate::parser::Record;
use crate::store::RecordStore;

impl RecordStore {
    pub(crate) fn distinct<'s, T, F>(&'s self, filter: RecordFilter<'s>, project: F) -> BTreeSet<T>
    where
        T: Ord,
        F: Fn(&'s Record) -> T,
    {
        self.select(filter).map(project).collect()
    }

    pub(crate) fn distinct_dates(&self, filter: RecordFilter<'_>) -> BTreeSet<NaiveDateTime> {
        self.select(filter).filter_map(Record::timestamp).collect()
    }

    /// Earliest matching timestamp; scans every match rather than trusting store order.
    pub(crate) fn earliest(&self, filter: RecordFilter<'_>) -> Option<NaiveDateTime> {
        self.select(filter).filter_map(Record::timestamp).min()
    }

    pub(crate) fn count(&self, filter: RecordFilter<'_>) -> usize {
        self.select(filter).count()
    }
}
