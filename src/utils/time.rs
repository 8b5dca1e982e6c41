use chrono::Utc;

/// Millisecond timestamp used for `createdAt` / `updatedAt` columns.
pub fn time_get_millis() -> i64 {
  Utc::now().timestamp_millis()
}
