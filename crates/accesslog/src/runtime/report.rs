//! Console rendering of query results and the summary report.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::filter::Window;
use crate::mql::QueryResult;
use crate::parser::Event;
use crate::store::RecordStore;

/// Headline figures over the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub records: usize,
    pub unique_ips: usize,
    pub users: BTreeSet<String>,
    pub events: BTreeSet<Event>,
    pub solved_tasks: BTreeMap<i32, usize>,
    pub done_tasks: BTreeMap<i32, usize>,
}

impl Summary {
    pub fn from_store(store: &RecordStore) -> Self {
        Self {
            records: store.len(),
            unique_ips: store.number_of_unique_ips(Window::UNBOUNDED),
            users: store.all_users(),
            events: store.all_events(Window::UNBOUNDED),
            solved_tasks: store.all_solved_tasks_and_their_number(Window::UNBOUNDED),
            done_tasks: store.all_done_tasks_and_their_number(Window::UNBOUNDED),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records:      {}", self.records)?;
        writeln!(f, "unique ips:   {}", self.unique_ips)?;
        writeln!(f, "users:        {}", join(self.users.iter()))?;
        writeln!(f, "events:       {}", join(self.events.iter()))?;
        writeln!(f, "solved tasks: {}", tally(&self.solved_tasks))?;
        write!(f, "done tasks:   {}", tally(&self.done_tasks))
    }
}

fn join<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

fn tally(map: &BTreeMap<i32, usize>) -> String {
    join(map.iter().map(|(task, count)| format!("{}={}", task, count)))
}

/// One element per line, or a JSON array.
pub fn render_result(result: &QueryResult, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(result)
    } else {
        Ok(result.to_strings().join("\n"))
    }
}

pub fn render_summary(summary: &Summary, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(summary)
    } else {
        Ok(summary.to_string())
    }
}
