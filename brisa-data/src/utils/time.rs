//! Time helpers
//!
//! Write stamps are plain Unix millis; repositories assign them so callers
//! never supply their own.

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
