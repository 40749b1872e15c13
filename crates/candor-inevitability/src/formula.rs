use candor_core::config::InevitabilityConfig;
use candor_core::models::EpisodeState;

/// 4-factor additive readiness formula.
///
/// ```text
/// score = min(recurringCap, recurringPatterns × recurringWeight)
///       + min(contradictionCap, unresolvedContradictions × contradictionWeight)
///       + (anyCriticalOpenLoop ? criticalLoopBonus : 0)
///       + (anyContradictedClaim ? contradictedClaimBonus : 0)
/// ```
///
/// Result is clamped to [0.0, 1.0]. Every factor is non-decreasing in its
/// count, so the score is too.
pub fn compute(state: &EpisodeState, config: &InevitabilityConfig) -> f64 {
    compute_breakdown(state, config).score
}

/// Each factor's count and contribution, for audit and debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct InevitabilityBreakdown {
    pub recurring_patterns: usize,
    pub recurring_contribution: f64,
    pub unresolved_contradictions: usize,
    pub contradiction_contribution: f64,
    pub critical_open_loop: bool,
    pub critical_loop_contribution: f64,
    pub contradicted_claim: bool,
    pub contradicted_claim_contribution: f64,
    pub score: f64,
}

impl InevitabilityBreakdown {
    /// Human-readable list of the factors that fired, `"; "`-joined.
    pub fn rationale(&self) -> String {
        let mut parts = Vec::new();
        if self.recurring_patterns > 0 {
            parts.push(format!(
                "{} recurring pattern(s) (+{:.2})",
                self.recurring_patterns, self.recurring_contribution
            ));
        }
        if self.unresolved_contradictions > 0 {
            parts.push(format!(
                "{} unresolved contradiction(s) (+{:.2})",
                self.unresolved_contradictions, self.contradiction_contribution
            ));
        }
        if self.critical_open_loop {
            parts.push(format!(
                "critical open loop (+{:.2})",
                self.critical_loop_contribution
            ));
        }
        if self.contradicted_claim {
            parts.push(format!(
                "contradicted claim (+{:.2})",
                self.contradicted_claim_contribution
            ));
        }
        parts.join("; ")
    }
}

pub fn compute_breakdown(
    state: &EpisodeState,
    config: &InevitabilityConfig,
) -> InevitabilityBreakdown {
    let recurring_patterns = state
        .recurring_patterns(config.recurring_min_occurrences)
        .count();
    let recurring_contribution = (recurring_patterns as f64 * config.recurring_pattern_weight)
        .min(config.recurring_pattern_cap);

    let unresolved_contradictions = state.unresolved_contradictions().count();
    let contradiction_contribution = (unresolved_contradictions as f64
        * config.contradiction_weight)
        .min(config.contradiction_cap);

    let critical_open_loop = state.has_critical_open_loop(config.critical_loop_priority);
    let critical_loop_contribution = if critical_open_loop {
        config.critical_loop_bonus
    } else {
        0.0
    };

    let contradicted_claim = state.has_contradicted_claim();
    let contradicted_claim_contribution = if contradicted_claim {
        config.contradicted_claim_bonus
    } else {
        0.0
    };

    let score = (recurring_contribution
        + contradiction_contribution
        + critical_loop_contribution
        + contradicted_claim_contribution)
        .clamp(0.0, 1.0);

    InevitabilityBreakdown {
        recurring_patterns,
        recurring_contribution,
        unresolved_contradictions,
        contradiction_contribution,
        critical_open_loop,
        critical_loop_contribution,
        contradicted_claim,
        contradicted_claim_contribution,
        score,
    }
}
