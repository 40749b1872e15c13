use serde::{Deserialize, Serialize};

use super::{
    ClaimEntry, ContradictionEntry, EchoPhrase, LoopStatus, OpenLoop, PatternSignal,
    ResolutionStatus, SafetySignal, SupportLevel,
};

/// The single long-lived, per-episode evidence record.
///
/// Owned and sequenced by the episode controller; engines only read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeState {
    pub episode_id: String,
    /// Index of the last processed turn, `None` before the first turn.
    pub current_turn: Option<u32>,
    pub act: u32,
    pub pattern_ledger: Vec<PatternSignal>,
    pub contradiction_ledger: Vec<ContradictionEntry>,
    pub open_loops: Vec<OpenLoop>,
    pub claims_ledger: Vec<ClaimEntry>,
    pub echo_phrases: Vec<EchoPhrase>,
    pub safety_signals: Vec<SafetySignal>,
}

impl EpisodeState {
    pub fn new(episode_id: impl Into<String>) -> Self {
        Self {
            episode_id: episode_id.into(),
            ..Default::default()
        }
    }

    /// Ledger patterns seen on at least `min_occurrences` turns.
    pub fn recurring_patterns(&self, min_occurrences: u32) -> impl Iterator<Item = &PatternSignal> {
        self.pattern_ledger
            .iter()
            .filter(move |p| p.is_recurring(min_occurrences))
    }

    pub fn unresolved_contradictions(&self) -> impl Iterator<Item = &ContradictionEntry> {
        self.contradiction_ledger
            .iter()
            .filter(|c| c.resolution_status == ResolutionStatus::Unaddressed)
    }

    /// Any open loop at or above `min_priority`.
    pub fn has_critical_open_loop(&self, min_priority: u8) -> bool {
        self.open_loops
            .iter()
            .any(|l| l.status == LoopStatus::Open && l.priority >= min_priority)
    }

    pub fn has_contradicted_claim(&self) -> bool {
        self.claims_ledger
            .iter()
            .any(|c| c.support_level == SupportLevel::Contradicted)
    }

    pub fn safety_signal_for_turn(&self, turn: u32) -> Option<&SafetySignal> {
        self.safety_signals.iter().find(|s| s.turn_index == turn)
    }

    /// Whether the turn currently being handled carries a safety signal.
    pub fn current_turn_in_crisis(&self) -> bool {
        self.current_turn
            .is_some_and(|t| self.safety_signal_for_turn(t).is_some())
    }

    /// Most recent turn that raised a safety signal. Deciding when normal
    /// flow resumes after it is left to the host.
    pub fn last_safety_turn(&self) -> Option<u32> {
        self.safety_signals.iter().map(|s| s.turn_index).max()
    }
}
