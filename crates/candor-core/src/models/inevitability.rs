use serde::{Deserialize, Serialize};

/// The fixed score thresholds returned alongside every inevitability score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub reveal: f64,
    pub soft_confront: f64,
    pub firm_confront: f64,
}

/// What the accumulated evidence currently justifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    Hold,
    SoftConfront,
    Reveal,
    FirmConfront,
}

/// Scalar readiness score with an audit-only rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InevitabilityResult {
    /// Always within [0.0, 1.0].
    pub score: f64,
    /// Human-readable list of the factors that fired. Never read back.
    pub rationale: String,
    pub thresholds: Thresholds,
}

impl InevitabilityResult {
    /// Classify the score, checking the highest threshold first.
    pub fn readiness(&self) -> Readiness {
        let t = &self.thresholds;
        if self.score >= t.firm_confront {
            Readiness::FirmConfront
        } else if self.score >= t.reveal {
            Readiness::Reveal
        } else if self.score >= t.soft_confront {
            Readiness::SoftConfront
        } else {
            Readiness::Hold
        }
    }
}
