use candor_core::config::EchoConfig;
use candor_core::models::EchoPhrase;
use candor_core::traits::IEchoCapture;

use crate::rules::EchoRuleSet;

/// Stateless echo phrase extractor.
#[derive(Debug, Clone, Default)]
pub struct EchoEngine {
    rules: EchoRuleSet,
    config: EchoConfig,
}

impl EchoEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EchoConfig) -> Self {
        Self {
            rules: EchoRuleSet::standard(),
            config,
        }
    }

    pub fn with_rules(rules: EchoRuleSet, config: EchoConfig) -> Self {
        Self { rules, config }
    }

    /// One echo per rule match, gated by `current_act + act_delay` and
    /// `turn_index + turn_delay`.
    pub fn capture(&self, text: &str, turn_index: u32, current_act: u32) -> Vec<EchoPhrase> {
        let mut echoes = Vec::new();
        for rule in self.rules.rules() {
            for phrase in rule.phrases(text) {
                echoes.push(EchoPhrase {
                    id: uuid::Uuid::new_v4().to_string(),
                    phrase: phrase.to_string(),
                    turn_index,
                    category: rule.category,
                    eligible_after_act: current_act.saturating_add(self.config.act_delay),
                    eligible_after_turn: turn_index.saturating_add(self.config.turn_delay),
                    used: false,
                });
            }
        }
        if !echoes.is_empty() {
            tracing::debug!(turn = turn_index, count = echoes.len(), "echo phrases captured");
        }
        echoes
    }

    /// Unused echoes whose act gate or turn gate has opened.
    pub fn eligible<'a>(
        &self,
        echoes: &'a [EchoPhrase],
        current_act: u32,
        current_turn: u32,
    ) -> Vec<&'a EchoPhrase> {
        echoes
            .iter()
            .filter(|e| e.is_eligible(current_act, current_turn))
            .collect()
    }
}

impl IEchoCapture for EchoEngine {
    fn capture(&self, text: &str, turn_index: u32, current_act: u32) -> Vec<EchoPhrase> {
        EchoEngine::capture(self, text, turn_index, current_act)
    }

    fn eligible<'a>(
        &self,
        echoes: &'a [EchoPhrase],
        current_act: u32,
        current_turn: u32,
    ) -> Vec<&'a EchoPhrase> {
        EchoEngine::eligible(self, echoes, current_act, current_turn)
    }
}
