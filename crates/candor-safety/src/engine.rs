use candor_core::models::{SafetySignal, SafetySignalType};
use candor_core::traits::ISafetyScreen;
use chrono::Utc;

use crate::responses;
use crate::rules::SafetyRuleSet;

/// Crisis detector over raw turn text.
///
/// Evaluates the rule set in priority order and returns at most one signal
/// per call. Holds nothing but its immutable rules, so one engine can serve
/// any number of episodes.
#[derive(Debug, Clone, Default)]
pub struct SafetyEngine {
    rules: SafetyRuleSet,
}

impl SafetyEngine {
    /// Create a SafetyEngine with the built-in rule table.
    pub fn new() -> Self {
        Self::with_rules(SafetyRuleSet::standard())
    }

    pub fn with_rules(rules: SafetyRuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SafetyRuleSet {
        &self.rules
    }

    /// Detect the highest-priority crisis in `text`.
    pub fn detect(&self, text: &str, turn_index: u32) -> Option<SafetySignal> {
        let rule = self.rules.first_match(text)?;
        tracing::warn!(
            turn = turn_index,
            signal = %rule.signal_type,
            rule = %rule.name,
            "safety signal raised"
        );
        Some(SafetySignal {
            signal_type: rule.signal_type,
            confidence: rule.confidence,
            turn_index,
            timestamp: Utc::now(),
        })
    }

    pub fn response(&self, signal_type: SafetySignalType) -> &'static str {
        responses::response_for(signal_type)
    }
}

impl ISafetyScreen for SafetyEngine {
    fn detect(&self, text: &str, turn_index: u32) -> Option<SafetySignal> {
        SafetyEngine::detect(self, text, turn_index)
    }

    fn response(&self, signal_type: SafetySignalType) -> &str {
        SafetyEngine::response(self, signal_type)
    }
}
