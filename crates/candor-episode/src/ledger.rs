use candor_core::config::LedgerConfig;
use candor_core::constants::MAX_LOOP_PRIORITY;
use candor_core::errors::EpisodeError;
use candor_core::models::{
    ClaimEntry, ContradictionEntry, EchoPhrase, EpisodeState, LoopStatus, OpenLoop,
    PatternSignal, ResolutionStatus, SafetySignal, SupportLevel,
};

/// Every write to an [`EpisodeState`] goes through here.
///
/// Ledgers only grow: echoes are marked used, contradictions addressed and
/// loops closed, but nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct EpisodeLedger {
    config: LedgerConfig,
}

impl EpisodeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Fold one turn's detector output into the pattern ledger.
    ///
    /// A kind already in the ledger gains `turn` as evidence (once) and its
    /// confidence escalates to `min(cap, max(old, new) + step)`. New kinds
    /// are appended in arrival order.
    pub fn merge_patterns(&self, state: &mut EpisodeState, signals: &[PatternSignal], turn: u32) {
        for signal in signals {
            match state
                .pattern_ledger
                .iter_mut()
                .find(|entry| entry.kind == signal.kind)
            {
                Some(entry) => {
                    if entry.evidence_turns.contains(&turn) {
                        continue;
                    }
                    entry.evidence_turns.push(turn);
                    entry.occurrence_count = entry.evidence_turns.len() as u32;
                    entry.first_seen_turn = entry.first_seen_turn.min(turn);
                    entry.last_seen_turn = entry.last_seen_turn.max(turn);
                    entry.confidence = (entry.confidence.max(signal.confidence)
                        + self.config.escalation_step)
                        .min(self.config.confidence_cap);
                    entry.interpretation = signal.interpretation.clone();
                    tracing::debug!(
                        kind = %entry.kind,
                        turn,
                        occurrences = entry.occurrence_count,
                        confidence = entry.confidence,
                        "pattern recurred"
                    );
                }
                None => state.pattern_ledger.push(PatternSignal::observed(
                    signal.kind,
                    turn,
                    signal.confidence.min(self.config.confidence_cap),
                    signal.interpretation.clone(),
                )),
            }
        }
    }

    pub fn record_echoes(&self, state: &mut EpisodeState, echoes: Vec<EchoPhrase>) {
        state.echo_phrases.extend(echoes);
    }

    /// Consume an echo. Each echo can be used exactly once.
    pub fn mark_echo_used<'s>(
        &self,
        state: &'s mut EpisodeState,
        id: &str,
    ) -> Result<&'s EchoPhrase, EpisodeError> {
        let echo = state
            .echo_phrases
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| EpisodeError::EchoNotFound { id: id.to_string() })?;
        if echo.used {
            return Err(EpisodeError::EchoAlreadyUsed { id: id.to_string() });
        }
        echo.used = true;
        Ok(echo)
    }

    /// Record a claim the held evidence disputes. Returns the new entry's id.
    pub fn add_contradiction(
        &self,
        state: &mut EpisodeState,
        claim: impl Into<String>,
        evidence: impl Into<String>,
        turn_index: u32,
    ) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        state.contradiction_ledger.push(ContradictionEntry {
            id: id.clone(),
            claim: claim.into(),
            evidence: evidence.into(),
            turn_index,
            resolution_status: ResolutionStatus::Unaddressed,
        });
        id
    }

    pub fn address_contradiction(
        &self,
        state: &mut EpisodeState,
        id: &str,
    ) -> Result<(), EpisodeError> {
        let entry = state
            .contradiction_ledger
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| EpisodeError::ContradictionNotFound { id: id.to_string() })?;
        entry.resolution_status = ResolutionStatus::Addressed;
        Ok(())
    }

    pub fn add_claim(
        &self,
        state: &mut EpisodeState,
        statement: impl Into<String>,
        turn_index: u32,
        support_level: SupportLevel,
    ) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        state.claims_ledger.push(ClaimEntry {
            id: id.clone(),
            statement: statement.into(),
            turn_index,
            support_level,
        });
        id
    }

    /// Open (or reopen) a loop on `topic`. Reopening takes the new priority.
    pub fn open_loop(
        &self,
        state: &mut EpisodeState,
        topic: &str,
        priority: u8,
        turn_index: u32,
    ) -> Result<(), EpisodeError> {
        if priority > MAX_LOOP_PRIORITY {
            return Err(EpisodeError::InvalidLoopPriority {
                priority,
                max: MAX_LOOP_PRIORITY,
            });
        }
        match state.open_loops.iter_mut().find(|l| l.topic == topic) {
            Some(existing) => {
                existing.priority = priority;
                existing.status = LoopStatus::Open;
                existing.opened_turn = Some(turn_index);
            }
            None => state.open_loops.push(OpenLoop {
                topic: topic.to_string(),
                priority,
                status: LoopStatus::Open,
                opened_turn: Some(turn_index),
            }),
        }
        Ok(())
    }

    pub fn close_loop(&self, state: &mut EpisodeState, topic: &str) -> Result<(), EpisodeError> {
        let entry = state
            .open_loops
            .iter_mut()
            .find(|l| l.topic == topic)
            .ok_or_else(|| EpisodeError::OpenLoopNotFound {
                topic: topic.to_string(),
            })?;
        entry.status = LoopStatus::Closed;
        Ok(())
    }

    pub fn record_safety_signal(&self, state: &mut EpisodeState, signal: SafetySignal) {
        state.safety_signals.push(signal);
    }
}
