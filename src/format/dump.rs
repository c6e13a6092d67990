//! Indented structured dumps

use serde::Serialize;

/// Pretty JSON (2-space indent) framed by newlines, so it sits on its own
/// lines inside a log message. A serialization failure yields the error text.
///
/// Non-finite floats (`NaN`, infinities) are not a failure: serde_json writes
/// them as `null`, so they show up as `null` in the dump.
pub fn dump_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => format!("\n{}\n", json),
        Err(err) => err.to_string(),
    }
}
