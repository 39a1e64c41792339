/// Mini query language
///
/// ```text
/// query     := "get" SELECTOR ( "for" SELECTOR "=" QUOTED )? ( "and" "date" "between" QUOTED "and" QUOTED )?
/// SELECTOR  := "ip" | "user" | "date" | "event" | "status"
/// QUOTED    := '"' <any chars except '"'> '"'
/// ```
///
/// Keywords are case-sensitive. Parsing happens in two stages: `lexer.rs`
/// splits the text into tokens, `parser.rs` turns them into a typed
/// [`QueryIntent`] and validates every literal. `eval.rs` runs an intent
/// against a [`RecordStore`](crate::store::RecordStore) and cannot fail.

pub mod eval;
pub mod lexer;
pub mod model;
pub mod parser;

pub use model::{Condition, QueryError, QueryIntent, QueryResult, Selector};
pub use parser::parse;
