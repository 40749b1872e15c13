use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated event on the subject's timeline, as supplied by the host.
///
/// `date` is kept as text; it is parsed during gap analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl TimelineEntry {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            label: None,
        }
    }
}

/// A stretch between two consecutive timeline events with nothing recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineGap {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub gap_days: i64,
    pub description: String,
}
