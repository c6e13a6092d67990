//! Formatters for values embedded in log lines

mod capture;
pub mod dump;
pub mod redact;
pub mod table;
pub mod value;

pub use dump::dump_json;
pub use redact::redact;
pub use table::Grid;
pub use value::Value;
