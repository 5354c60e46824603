use chrono::{DateTime, Utc};

/// Formats an epoch-seconds timestamp as a day-granularity bucket label,
/// e.g. "Jan 5". Labels carry no year, so the same calendar day from
/// different years maps to the same bucket. Evaluated in UTC.
pub fn bucket_label(epoch_seconds: i64) -> String {
    let dt: DateTime<Utc> =
        DateTime::from_timestamp(epoch_seconds, 0).unwrap_or(DateTime::UNIX_EPOCH);
    dt.format("%b %-d").to_string()
}

/// Converts minor currency units (cents) to major units (dollars).
pub fn minor_to_major(minor: i64) -> f64 {
    minor as f64 / 100.0
}
