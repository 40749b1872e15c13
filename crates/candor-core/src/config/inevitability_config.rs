use serde::{Deserialize, Serialize};

use crate::constants;

/// Weights, caps, and thresholds of the inevitability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InevitabilityConfig {
    pub recurring_pattern_weight: f64,
    pub recurring_pattern_cap: f64,
    pub recurring_min_occurrences: u32,
    pub contradiction_weight: f64,
    pub contradiction_cap: f64,
    pub critical_loop_bonus: f64,
    pub critical_loop_priority: u8,
    pub contradicted_claim_bonus: f64,
    pub reveal_threshold: f64,
    pub soft_confront_threshold: f64,
    pub firm_confront_threshold: f64,
}

impl Default for InevitabilityConfig {
    fn default() -> Self {
        Self {
            recurring_pattern_weight: constants::RECURRING_PATTERN_WEIGHT,
            recurring_pattern_cap: constants::RECURRING_PATTERN_CAP,
            recurring_min_occurrences: constants::RECURRING_PATTERN_MIN_OCCURRENCES,
            contradiction_weight: constants::CONTRADICTION_WEIGHT,
            contradiction_cap: constants::CONTRADICTION_CAP,
            critical_loop_bonus: constants::CRITICAL_LOOP_BONUS,
            critical_loop_priority: constants::CRITICAL_LOOP_PRIORITY,
            contradicted_claim_bonus: constants::CONTRADICTED_CLAIM_BONUS,
            reveal_threshold: constants::REVEAL_THRESHOLD,
            soft_confront_threshold: constants::SOFT_CONFRONT_THRESHOLD,
            firm_confront_threshold: constants::FIRM_CONFRONT_THRESHOLD,
        }
    }
}
