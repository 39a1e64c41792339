use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::filter::{RecordFilter, Window};
use crate::parser::{Event, Status};
use crate::store::RecordStore;

impl RecordStore {
    pub fn dates_for_user_and_event(&self, user: &str, event: Event, window: Window) -> BTreeSet<NaiveDateTime> {
        self.distinct_dates(RecordFilter::new().actor(user).event(event).window(window))
    }

    pub fn dates_when_something_failed(&self, window: Window) -> BTreeSet<NaiveDateTime> {
        self.distinct_dates(RecordFilter::new().outcome(Status::Failed).window(window))
    }

    pub fn dates_when_error_happened(&self, window: Window) -> BTreeSet<NaiveDateTime> {
        self.distinct_dates(RecordFilter::new().outcome(Status::Error).window(window))
    }

    pub fn date_when_user_logged_first_time(&self, user: &str, window: Window) -> Option<NaiveDateTime> {
        self.earliest(RecordFilter::new().actor(user).event(Event::Login).window(window))
    }

    pub fn date_when_user_solved_task(&self, user: &str, task: i32, window: Window) -> Option<NaiveDateTime> {
        self.earliest(
            RecordFilter::new()
                .actor(user)
                .event(Event::SolveTask)
                .task(task)
                .window(window),
        )
    }

    pub fn date_when_user_done_task(&self, user: &str, task: i32, window: Window) -> Option<NaiveDateTime> {
        self.earliest(
            RecordFilter::new()
                .actor(user)
                .event(Event::DoneTask)
                .task(task)
                .window(window),
        )
    }

    pub fn dates_when_user_wrote_message(&self, user: &str, window: Window) -> BTreeSet<NaiveDateTime> {
        self.dates_for_user_and_event(user, Event::WriteMessage, window)
    }

    pub fn dates_when_user_downloaded_plugin(&self, user: &str, window: Window) -> BTreeSet<NaiveDateTime> {
        self.dates_for_user_and_event(user, Event::DownloadPlugin, window)
    }
}
