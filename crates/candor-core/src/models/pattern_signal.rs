use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of linguistic/behavioral signals the pattern engine detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// "It's not a big deal", "just a little".
    MinimizationLanguage,
    /// "Always", "never", "everyone".
    AbsolutistLanguage,
    /// "Things were said", "mistakes were made".
    PassiveVoiceShift,
    /// Events described with no one doing them.
    ActorOmission,
    /// Laughing off a hard question.
    HumorDeflection,
    /// "We'll get to that", "maybe later".
    FutureTenseEvasion,
    /// Body talking: shaking, racing heart, can't breathe.
    SomaticLeakage,
    /// "It was always going to happen", "I had no choice".
    InevitabilityLanguage,
    /// "I'm so ashamed", "it was my fault".
    ShameCue,
    /// "I don't remember", "my mind went blank".
    FreezeCue,
    /// Sudden one-to-three word answers.
    BrevitySpike,
}

impl PatternKind {
    /// Every kind, in registry order.
    pub const ALL: [PatternKind; 11] = [
        PatternKind::MinimizationLanguage,
        PatternKind::AbsolutistLanguage,
        PatternKind::PassiveVoiceShift,
        PatternKind::ActorOmission,
        PatternKind::HumorDeflection,
        PatternKind::FutureTenseEvasion,
        PatternKind::SomaticLeakage,
        PatternKind::InevitabilityLanguage,
        PatternKind::ShameCue,
        PatternKind::FreezeCue,
        PatternKind::BrevitySpike,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::MinimizationLanguage => "minimization_language",
            PatternKind::AbsolutistLanguage => "absolutist_language",
            PatternKind::PassiveVoiceShift => "passive_voice_shift",
            PatternKind::ActorOmission => "actor_omission",
            PatternKind::HumorDeflection => "humor_deflection",
            PatternKind::FutureTenseEvasion => "future_tense_evasion",
            PatternKind::SomaticLeakage => "somatic_leakage",
            PatternKind::InevitabilityLanguage => "inevitability_language",
            PatternKind::ShameCue => "shame_cue",
            PatternKind::FreezeCue => "freeze_cue",
            PatternKind::BrevitySpike => "brevity_spike",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected pattern, either fresh from one turn or accumulated in the
/// episode's pattern ledger.
///
/// `occurrence_count` always equals `evidence_turns.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSignal {
    pub kind: PatternKind,
    pub evidence_turns: Vec<u32>,
    pub confidence: f64,
    pub interpretation: String,
    pub first_seen_turn: u32,
    pub last_seen_turn: u32,
    pub occurrence_count: u32,
}

impl PatternSignal {
    /// A single-turn signal as emitted by a detector.
    pub fn observed(
        kind: PatternKind,
        turn: u32,
        confidence: f64,
        interpretation: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            evidence_turns: vec![turn],
            confidence: confidence.clamp(0.0, 1.0),
            interpretation: interpretation.into(),
            first_seen_turn: turn,
            last_seen_turn: turn,
            occurrence_count: 1,
        }
    }

    /// Whether the signal has been seen on at least `min_occurrences` turns.
    pub fn is_recurring(&self, min_occurrences: u32) -> bool {
        self.occurrence_count >= min_occurrences
    }
}
