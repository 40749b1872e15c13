use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A packaged unit of evidence that can be revealed to the subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReceiptCard {
    /// Something the subject (or someone else) said on the record.
    Quote {
        text: String,
        speaker: String,
        #[serde(default)]
        source: Option<String>,
        #[serde(default)]
        turn_index: Option<u32>,
    },
    Photo {
        asset_ref: String,
        caption: String,
        #[serde(default)]
        taken_on: Option<NaiveDate>,
    },
    TimelineSnap {
        date: NaiveDate,
        title: String,
        description: String,
    },
    /// A stretch of the subject's timeline with nothing recorded.
    MissingTape {
        start_date: NaiveDate,
        end_date: NaiveDate,
        gap_days: i64,
        description: String,
    },
}

/// Payload-free discriminant of a [`ReceiptCard`], used as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptKind {
    Quote,
    Photo,
    TimelineSnap,
    MissingTape,
}

impl ReceiptCard {
    pub fn kind(&self) -> ReceiptKind {
        match self {
            ReceiptCard::Quote { .. } => ReceiptKind::Quote,
            ReceiptCard::Photo { .. } => ReceiptKind::Photo,
            ReceiptCard::TimelineSnap { .. } => ReceiptKind::TimelineSnap,
            ReceiptCard::MissingTape { .. } => ReceiptKind::MissingTape,
        }
    }
}
