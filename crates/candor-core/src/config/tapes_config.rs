use serde::{Deserialize, Serialize};

use crate::constants;

/// Missing-tape gap analysis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapesConfig {
    /// Shortest gap, in days, reported as a missing tape (inclusive).
    pub min_gap_days: i64,
}

impl Default for TapesConfig {
    fn default() -> Self {
        Self {
            min_gap_days: constants::MIN_GAP_DAYS,
        }
    }
}
