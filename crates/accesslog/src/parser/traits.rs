pub use super::model::{DecodeError, Record};

pub trait LineDecoder: Send + Sync {
    /// decode one raw log line (without its terminator) into a record
    fn decode(&self, line: &str) -> Result<Record, DecodeError>;
}
