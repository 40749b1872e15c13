use serde::{Deserialize, Serialize};

use crate::constants;

/// How repeated pattern signals accumulate in the episode ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Confidence added to a ledger entry each time its pattern recurs.
    pub escalation_step: f64,
    /// Ceiling for escalated ledger confidence.
    pub confidence_cap: f64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            escalation_step: constants::LEDGER_ESCALATION_STEP,
            confidence_cap: constants::DETECTOR_CONFIDENCE_CAP,
        }
    }
}
