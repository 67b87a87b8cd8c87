//! Time related utils.

/// The timestamp type used across this crate, UTC only.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Return the current timestamp.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Format a timestamp as decimal Unix epoch milliseconds.
pub fn format_timestamp_millis(t: DateTime) -> String {
    t.timestamp_millis().to_string()
}
