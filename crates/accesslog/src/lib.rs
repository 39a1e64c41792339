// Module structure for the access-log analyzer.

// Core
pub mod parser;
pub mod filter;
pub mod store;
pub mod query;

// Query language
pub mod mql;

// Process shell
pub mod conf;
pub mod runtime;

pub use filter::Window;
pub use mql::{QueryError, QueryResult};
pub use parser::{Event, Record, Status};
pub use store::RecordStore;
