use std::collections::BTreeSet;

use crate::filter::{RecordFilter, Window};
use crate::parser::Event;
use crate::store::RecordStore;

impl RecordStore {
    /// Every actor in the store, regardless of timestamp.
    pub fn all_users(&self) -> BTreeSet<String> {
        self.distinct(RecordFilter::new(), |r| r.actor().to_string())
    }

    pub fn number_of_users(&self, window: Window) -> usize {
        self.distinct(RecordFilter::new().window(window), |r| r.actor()).len()
    }

    /// Number of distinct events `user` triggered.
    pub fn number_of_user_events(&self, user: &str, window: Window) -> usize {
        self.distinct(RecordFilter::new().actor(user).window(window), |r| r.event()).len()
    }

    pub fn users_for_ip(&self, ip: &str, window: Window) -> BTreeSet<String> {
        self.users_where(RecordFilter::new().origin(ip).window(window))
    }

    pub fn logged_users(&self, window: Window) -> BTreeSet<String> {
        self.users_where(RecordFilter::new().event(Event::Login).window(window))
    }

    pub fn downloaded_plugin_users(&self, window: Window) -> BTreeSet<String> {
        self.users_where(RecordFilter::new().event(Event::DownloadPlugin).window(window))
    }

    pub fn wrote_message_users(&self, window: Window) -> BTreeSet<String> {
        self.users_where(RecordFilter::new().event(Event::WriteMessage).window(window))
    }

    pub fn solved_task_users(&self, window: Window) -> BTreeSet<String> {
        self.users_where(RecordFilter::new().event(Event::SolveTask).window(window))
    }

    pub fn solved_task_users_for(&self, task: i32, window: Window) -> BTreeSet<String> {
        self.users_where(RecordFilter::new().event(Event::SolveTask).task(task).window(window))
    }

    pub fn done_task_users(&self, window: Window) -> BTreeSet<String> {
        self.users_where(RecordFilter::new().event(Event::DoneTask).window(window))
    }

    pub fn done_task_users_for(&self, task: i32, window: Window) -> BTreeSet<String> {
        self.users_where(RecordFilter::new().event(Event::DoneTask).task(task).window(window))
    }

    fn users_where(&self, filter: RecordFilter<'_>) -> BTreeSet<String> {
        self.distinct(filter, |r| r.actor().to_string())
    }
}
