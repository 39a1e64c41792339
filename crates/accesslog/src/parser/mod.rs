/// Access-log line decoding
///
/// Turns raw tab-delimited lines into [`Record`]s.
///
/// # Architecture
///
/// - `model.rs`: Record, Event, Status and the decode error type
/// - `traits.rs`: the `LineDecoder` seam
/// - `tab.rs`: the tab-separated decoder used for `.log` files
/// - `date.rs`: the fixed `d.M.yyyy H:m:s` timestamp format
///
/// Decoding never panics on bad input. A line either yields a complete
/// record (possibly carrying `Unknown` enum values or no timestamp) or a
/// `DecodeError` telling the caller why it was rejected.

pub mod date;
pub mod model;
pub mod tab;
pub mod traits;

pub use model::{DecodeError, Event, Record, Status};
pub use tab::TabLineDecoder;
pub use traits::LineDecoder;

// Constants
pub const MAX_LINE_SIZE: usize = 1_048_576; // 1MB
pub const FIELD_COUNT: usize = 5;
