use serde::{Deserialize, Serialize};

use crate::constants;

/// Veto chain limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernorConfig {
    /// Pressure at or above which PRESS is vetoed.
    pub pressure_ceiling: u8,
    /// Inevitability below which every reveal is vetoed.
    pub min_reveal_score: f64,
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            pressure_ceiling: constants::PRESSURE_CEILING,
            min_reveal_score: constants::MIN_REVEAL_SCORE,
        }
    }
}
