//! Filter module: record predicates, date windows, and their AND composition.

pub mod engine;
pub mod predicate;
pub mod window;

pub use engine::RecordFilter;
pub use window::Window;
