use candor_core::models::{EchoPhrase, InevitabilityResult, PatternSignal, Readiness, SafetySignal};
use serde::{Deserialize, Serialize};

/// Outcome of one processed turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TurnReport {
    /// A crisis was detected. The host delivers `response` and nothing else.
    SafetyHold {
        signal: SafetySignal,
        response: String,
    },
    Signals(TurnSignals),
}

impl TurnReport {
    pub fn is_safety_hold(&self) -> bool {
        matches!(self, TurnReport::SafetyHold { .. })
    }

    pub fn signals(&self) -> Option<&TurnSignals> {
        match self {
            TurnReport::Signals(signals) => Some(signals),
            TurnReport::SafetyHold { .. } => None,
        }
    }
}

/// What a normal turn produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnSignals {
    pub turn: u32,
    /// This turn's detector output, before merging.
    pub patterns: Vec<PatternSignal>,
    /// Echoes captured this turn.
    pub echoes: Vec<EchoPhrase>,
    pub inevitability: InevitabilityResult,
    pub readiness: Readiness,
    /// Ids of every echo (from any turn) that may be replayed now.
    pub eligible_echo_ids: Vec<String>,
}
