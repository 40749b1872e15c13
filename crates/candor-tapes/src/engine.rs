use candor_core::config::TapesConfig;
use candor_core::errors::TapesError;
use candor_core::models::{ReceiptCard, TimelineEntry, TimelineGap};
use chrono::NaiveDate;

use crate::dates;

/// Gap finder over a chronological timeline.
#[derive(Debug, Clone, Default)]
pub struct MissingTapesEngine {
    config: TapesConfig,
}

impl MissingTapesEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TapesConfig) -> Self {
        Self { config }
    }

    pub fn min_gap_days(&self) -> i64 {
        self.config.min_gap_days
    }

    /// Every gap of at least `min_gap_days` between consecutive entries,
    /// longest first. Equal-length gaps keep chronological order.
    ///
    /// Any unparseable date fails the whole call; no partial result is
    /// returned.
    pub fn find_gaps(&self, timeline: &[TimelineEntry]) -> Result<Vec<TimelineGap>, TapesError> {
        if timeline.len() < 2 {
            return Ok(Vec::new());
        }

        let mut dated: Vec<(NaiveDate, &TimelineEntry)> = timeline
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                dates::parse_timeline_date(&entry.date)
                    .map(|d| (d, entry))
                    .ok_or_else(|| TapesError::InvalidDate {
                        index,
                        value: entry.date.clone(),
                    })
            })
            .collect::<Result<_, _>>()?;

        // Stable: entries sharing a date keep their input order.
        dated.sort_by_key(|(d, _)| *d);

        let mut gaps: Vec<TimelineGap> = dated
            .windows(2)
            .filter_map(|pair| {
                let (start, start_entry) = pair[0];
                let (end, _) = pair[1];
                let gap_days = (end - start).num_days();
                (gap_days >= self.config.min_gap_days).then(|| TimelineGap {
                    start_date: start,
                    end_date: end,
                    gap_days,
                    description: describe(start, end, gap_days, start_entry.label.as_deref()),
                })
            })
            .collect();

        gaps.sort_by(|a, b| b.gap_days.cmp(&a.gap_days));

        tracing::debug!(entries = timeline.len(), gaps = gaps.len(), "timeline gaps computed");
        Ok(gaps)
    }

    /// Wrap a gap as a `missing_tape` receipt card.
    pub fn create_receipt_card(&self, gap: &TimelineGap) -> ReceiptCard {
        ReceiptCard::MissingTape {
            start_date: gap.start_date,
            end_date: gap.end_date,
            gap_days: gap.gap_days,
            description: gap.description.clone(),
        }
    }
}

fn describe(start: NaiveDate, end: NaiveDate, gap_days: i64, after: Option<&str>) -> String {
    let months = dates::approx_months(gap_days);
    let mut description = format!("{months} months unaccounted for between {start} and {end}");
    if let Some(label) = after {
        description.push_str(&format!(" (nothing recorded after \"{label}\")"));
    }
    description
}
