use tracing::debug;

use super::model::{Condition, QueryError, QueryIntent, QueryResult, Selector};
use super::parser::parse;
use crate::filter::RecordFilter;
use crate::store::RecordStore;

impl RecordStore {
    /// Parse and run a query, e.g. `get ip for user = "Amigo"`.
    pub fn execute(&self, query: &str) -> Result<QueryResult, QueryError> {
        let intent = parse(query)?;
        debug!(?intent, "Parsed query");
        Ok(self.evaluate(&intent))
    }

    /// Run a parsed query. The condition and window are ANDed; a query
    /// without a window also matches records that have no usable timestamp.
    pub fn evaluate(&self, intent: &QueryIntent) -> QueryResult {
        let mut filter = RecordFilter::new();
        match &intent.condition {
            Some(Condition::Ip(ip)) => filter = filter.origin(ip),
            Some(Condition::User(user)) => filter = filter.actor(user),
            Some(Condition::Date(at)) => filter = filter.at(*at),
            Some(Condition::Event(event)) => filter = filter.event(*event),
            Some(Condition::Status(status)) => filter = filter.outcome(*status),
            None => {}
        }
        if let Some(window) = intent.window {
            filter = filter.window(window);
        }

        match intent.select {
            Selector::Ip => QueryResult::Strings(self.distinct(filter, |r| r.origin().to_string())),
            Selector::User => QueryResult::Strings(self.distinct(filter, |r| r.actor().to_string())),
            Selector::Date => QueryResult::Dates(self.distinct_dates(filter)),
            Selector::Event => QueryResult::Events(self.distinct(filter, |r| r.event())),
            Selector::Status => QueryResult::Statuses(self.distinct(filter, |r| r.outcome())),
        }
    }
}
