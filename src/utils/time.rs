use chrono::{FixedOffset, Utc};

/// Reports are read in the operator's time zone (UTC+8), independent of
/// where the service runs.
const REPORT_UTC_OFFSET_HOURS: i32 = 8;

/// Human-readable event time in the report time zone.
pub fn report_timestamp() -> String {
    let offset = FixedOffset::east_opt(REPORT_UTC_OFFSET_HOURS * 3600).unwrap();
    Utc::now()
        .with_timezone(&offset)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Insertion-recency sort key, epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
