use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a timeline date. Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and
/// naive `YYYY-MM-DDTHH:MM:SS` timestamps; time of day is discarded.
pub fn parse_timeline_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Whole months in `days`, rounded to nearest (30-day months).
pub fn approx_months(days: i64) -> i64 {
    (days as f64 / 30.0).round() as i64
}
