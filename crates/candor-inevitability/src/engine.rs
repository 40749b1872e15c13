use candor_core::config::InevitabilityConfig;
use candor_core::models::{EpisodeState, InevitabilityResult, Thresholds};
use candor_core::traits::IInevitabilityScorer;

use crate::formula::{self, InevitabilityBreakdown};

/// Readiness scorer. Flat thresholds, no per-episode tuning.
#[derive(Debug, Clone, Default)]
pub struct InevitabilityEngine {
    config: InevitabilityConfig,
}

impl InevitabilityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InevitabilityConfig) -> Self {
        Self { config }
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            reveal: self.config.reveal_threshold,
            soft_confront: self.config.soft_confront_threshold,
            firm_confront: self.config.firm_confront_threshold,
        }
    }

    pub fn compute(&self, state: &EpisodeState) -> InevitabilityResult {
        let breakdown = formula::compute_breakdown(state, &self.config);
        let result = InevitabilityResult {
            score: breakdown.score,
            rationale: breakdown.rationale(),
            thresholds: self.thresholds(),
        };
        tracing::debug!(
            episode = %state.episode_id,
            score = result.score,
            readiness = ?result.readiness(),
            "inevitability recomputed"
        );
        result
    }

    /// Compute with a full breakdown of each factor.
    pub fn compute_breakdown(&self, state: &EpisodeState) -> InevitabilityBreakdown {
        formula::compute_breakdown(state, &self.config)
    }
}

impl IInevitabilityScorer for InevitabilityEngine {
    fn compute(&self, state: &EpisodeState) -> InevitabilityResult {
        InevitabilityEngine::compute(self, state)
    }
}
