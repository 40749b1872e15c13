use crate::models::{EpisodeState, InevitabilityResult};

/// Fuses the episode ledgers into one readiness score.
pub trait IInevitabilityScorer: Send + Sync {
    fn compute(&self, state: &EpisodeState) -> InevitabilityResult;
}
