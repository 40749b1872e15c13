use serde::{Deserialize, Serialize};

use crate::constants;

/// Pattern detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Ceiling for any single detector's confidence.
    pub confidence_cap: f64,
    /// Longest utterance (in words) that counts as a brevity spike.
    pub brevity_max_words: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            confidence_cap: constants::DETECTOR_CONFIDENCE_CAP,
            brevity_max_words: 3,
        }
    }
}
