use candor_core::config::CandorConfig;
use candor_core::errors::EpisodeError;
use candor_core::models::{
    Device, EpisodeState, RevealPlan, RevealReview, RevealStatus, SpVeto, Strategy, VetoReason,
};
use candor_core::traits::{IEchoCapture, IInevitabilityScorer, IPatternDetector, ISafetyScreen};
use candor_core::CandorResult;
use candor_echo::EchoEngine;
use candor_governor::{Proposal, SpGovernor};
use candor_inevitability::InevitabilityEngine;
use candor_patterns::PatternEngine;
use candor_safety::SafetyEngine;

use crate::ledger::EpisodeLedger;
use crate::report::{TurnReport, TurnSignals};

const SAFETY_SUPPRESSION: &str = "safety signal active for this turn";

/// Per-turn sequencing of every engine over one episode's state.
///
/// Engines sit behind their traits so any of them can be swapped. The
/// pipeline itself holds no episode data; callers pass the state in, so one
/// pipeline serves every episode.
pub struct TurnPipeline {
    safety: Box<dyn ISafetyScreen>,
    patterns: Box<dyn IPatternDetector>,
    echo: Box<dyn IEchoCapture>,
    scorer: Box<dyn IInevitabilityScorer>,
    governor: SpGovernor,
    ledger: EpisodeLedger,
}

impl TurnPipeline {
    /// Pipeline with the built-in engines and default configuration.
    pub fn new() -> Self {
        Self::from_config(&CandorConfig::default())
    }

    pub fn from_config(config: &CandorConfig) -> Self {
        Self {
            safety: Box::new(SafetyEngine::new()),
            patterns: Box::new(PatternEngine::with_config(&config.patterns)),
            echo: Box::new(EchoEngine::with_config(config.echo.clone())),
            scorer: Box::new(InevitabilityEngine::with_config(config.inevitability.clone())),
            governor: SpGovernor::with_config(config.governor.clone()),
            ledger: EpisodeLedger::with_config(config.ledger.clone()),
        }
    }

    pub fn with_safety(mut self, safety: Box<dyn ISafetyScreen>) -> Self {
        self.safety = safety;
        self
    }

    pub fn with_patterns(mut self, patterns: Box<dyn IPatternDetector>) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn with_echo(mut self, echo: Box<dyn IEchoCapture>) -> Self {
        self.echo = echo;
        self
    }

    pub fn with_scorer(mut self, scorer: Box<dyn IInevitabilityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_governor(mut self, governor: SpGovernor) -> Self {
        self.governor = governor;
        self
    }

    pub fn ledger(&self) -> &EpisodeLedger {
        &self.ledger
    }

    pub fn governor(&self) -> &SpGovernor {
        &self.governor
    }

    /// Process one subject utterance.
    ///
    /// Turn indices must strictly increase within an episode. Safety runs
    /// first; when it fires, the signal is recorded and no other engine runs.
    pub fn process_turn(
        &self,
        state: &mut EpisodeState,
        turn_index: u32,
        text: &str,
    ) -> CandorResult<TurnReport> {
        let _span =
            tracing::info_span!("candor.turn", episode = %state.episode_id, turn = turn_index)
                .entered();
        if let Some(last) = state.current_turn {
            if turn_index <= last {
                return Err(EpisodeError::TurnOutOfOrder {
                    expected_after: last,
                    got: turn_index,
                }
                .into());
            }
        }
        state.current_turn = Some(turn_index);

        if let Some(signal) = self.safety.detect(text, turn_index) {
            let response = self.safety.response(signal.signal_type).to_string();
            self.ledger.record_safety_signal(state, signal.clone());
            tracing::info!(
                episode = %state.episode_id,
                turn = turn_index,
                signal = %signal.signal_type,
                "safety hold"
            );
            return Ok(TurnReport::SafetyHold { signal, response });
        }

        let patterns = self.patterns.detect_patterns(text, turn_index);
        self.ledger.merge_patterns(state, &patterns, turn_index);

        let echoes = self.echo.capture(text, turn_index, state.act);
        self.ledger.record_echoes(state, echoes.clone());

        let inevitability = self.scorer.compute(state);
        let readiness = inevitability.readiness();
        let eligible_echo_ids = self
            .echo
            .eligible(&state.echo_phrases, state.act, turn_index)
            .into_iter()
            .map(|e| e.id.clone())
            .collect();

        Ok(TurnReport::Signals(TurnSignals {
            turn: turn_index,
            patterns,
            echoes,
            inevitability,
            readiness,
            eligible_echo_ids,
        }))
    }

    /// Move the episode into its next act. Returns the new act number.
    pub fn advance_act(&self, state: &mut EpisodeState) -> u32 {
        state.act = state.act.saturating_add(1);
        tracing::info!(episode = %state.episode_id, act = state.act, "act advanced");
        state.act
    }

    /// Gate a reveal plan against the current turn and the governor.
    ///
    /// A safety signal on the current turn vetoes the plan outright.
    /// Otherwise the governor reviews it against a freshly computed score.
    pub fn authorize_reveal(
        &self,
        state: &EpisodeState,
        plan: &mut RevealPlan,
    ) -> CandorResult<RevealReview> {
        if state.current_turn_in_crisis() {
            if plan.status != RevealStatus::Vetoed {
                plan.transition(RevealStatus::Vetoed)?;
            }
            tracing::warn!(plan = %plan.id, "reveal suppressed by safety signal");
            return Ok(RevealReview::vetoed(SAFETY_SUPPRESSION));
        }
        let score = self.scorer.compute(state).score;
        Ok(self.governor.apply_reveal_review(plan, score)?)
    }

    /// Deliver an approved plan on the current turn.
    ///
    /// Nothing is delivered on a turn holding a safety signal. With
    /// `abort_on_safety_signal` set the plan is vetoed; otherwise it stays
    /// approved for a later turn.
    pub fn deliver_reveal(
        &self,
        state: &EpisodeState,
        plan: &mut RevealPlan,
    ) -> CandorResult<RevealReview> {
        if state.current_turn_in_crisis() {
            if plan.veto_policy.abort_on_safety_signal && plan.status != RevealStatus::Vetoed {
                plan.transition(RevealStatus::Vetoed)?;
            }
            tracing::warn!(
                plan = %plan.id,
                status = ?plan.status,
                "delivery suppressed by safety signal"
            );
            return Ok(RevealReview::vetoed(SAFETY_SUPPRESSION));
        }
        plan.transition(RevealStatus::Delivered)?;
        tracing::info!(episode = %state.episode_id, plan = %plan.id, "reveal delivered");
        Ok(RevealReview::allowed())
    }

    /// Subject declined at the permission gate.
    pub fn decline_reveal(&self, plan: &mut RevealPlan) -> CandorResult<()> {
        plan.decline()?;
        tracing::info!(plan = %plan.id, "reveal declined by subject");
        Ok(())
    }

    /// Review a proposed strategy. During a safety hold only grounding is
    /// allowed, whatever the proposal's own context says.
    pub fn review_strategy(&self, state: &EpisodeState, proposal: &Proposal<'_>) -> SpVeto {
        if state.current_turn_in_crisis() && proposal.strategy != Strategy::SafetyGround {
            tracing::warn!(
                episode = %state.episode_id,
                proposed = ?proposal.strategy,
                "strategy suppressed by safety signal"
            );
            return SpVeto::veto(
                VetoReason::SafetyPrecedence,
                SAFETY_SUPPRESSION,
                Strategy::SafetyGround,
                Some(Device::Grounding),
            );
        }
        self.governor.review(proposal)
    }

    /// Consume an echo for a callback.
    pub fn use_echo(&self, state: &mut EpisodeState, id: &str) -> CandorResult<()> {
        self.ledger.mark_echo_used(state, id)?;
        Ok(())
    }
}

impl Default for TurnPipeline {
    fn default() -> Self {
        Self::new()
    }
}
