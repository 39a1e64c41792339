use std::collections::BTreeMap;

use crate::filter::{RecordFilter, Window};
use crate::parser::Event;
use crate::store::RecordStore;

impl RecordStore {
    /// Raw count of SOLVE_TASK records for `task`; repeats are not merged.
    pub fn number_of_attempts_to_solve_task(&self, task: i32, window: Window) -> usize {
        self.count(RecordFilter::new().event(Event::SolveTask).task(task).window(window))
    }

    /// Raw count of DONE_TASK records for `task`; repeats are not merged.
    pub fn number_of_successful_attempts_to_solve_task(&self, task: i32, window: Window) -> usize {
        self.count(RecordFilter::new().event(Event::DoneTask).task(task).window(window))
    }

    /// Each task id attempted in `window`, mapped to its attempt count in `window`.
    pub fn all_solved_tasks_and_their_number(&self, window: Window) -> BTreeMap<i32, usize> {
        self.task_tally(Event::SolveTask, window)
    }

    /// Each task id completed in `window`, mapped to its completion count in `window`.
    pub fn all_done_tasks_and_their_number(&self, window: Window) -> BTreeMap<i32, usize> {
        self.task_tally(Event::DoneTask, window)
    }

    // Single pass over the window. Produces the same map as calling the
    // per-task counter above for every distinct task id, without the O(N·T) rescan.
    fn task_tally(&self, event: Event, window: Window) -> BTreeMap<i32, usize> {
        let mut tally = BTreeMap::new();
        for record in self.select(RecordFilter::new().event(event).window(window)) {
            if let Some(task) = record.task_id() {
                *tally.entry(task).or_insert(0) += 1;
            }
        }
        tally
    }
}
