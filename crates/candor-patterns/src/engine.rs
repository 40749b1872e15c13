use candor_core::config::PatternConfig;
use candor_core::models::PatternSignal;
use candor_core::traits::IPatternDetector;

use crate::registry::DetectorRegistry;

/// Runs every registered detector against a turn and returns their union.
///
/// Referentially transparent: the same `(text, turn_index)` always yields the
/// same signals in the same (registry) order.
#[derive(Debug, Clone)]
pub struct PatternEngine {
    registry: DetectorRegistry,
    confidence_cap: f64,
}

impl PatternEngine {
    /// Create a PatternEngine with the built-in detectors and default config.
    pub fn new() -> Self {
        Self::with_config(&PatternConfig::default())
    }

    pub fn with_config(config: &PatternConfig) -> Self {
        Self {
            registry: DetectorRegistry::standard(config),
            confidence_cap: config.confidence_cap,
        }
    }

    /// Use a custom detector table.
    pub fn with_registry(registry: DetectorRegistry, confidence_cap: f64) -> Self {
        Self {
            registry,
            confidence_cap,
        }
    }

    pub fn registry(&self) -> &DetectorRegistry {
        &self.registry
    }

    pub fn detect_patterns(&self, text: &str, turn_index: u32) -> Vec<PatternSignal> {
        let signals: Vec<PatternSignal> = self
            .registry
            .detectors()
            .iter()
            .filter_map(|d| d.detect(text, turn_index, self.confidence_cap))
            .collect();

        tracing::debug!(
            turn = turn_index,
            count = signals.len(),
            kinds = ?signals.iter().map(|s| s.kind).collect::<Vec<_>>(),
            "patterns detected"
        );
        signals
    }
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IPatternDetector for PatternEngine {
    fn detect_patterns(&self, text: &str, turn_index: u32) -> Vec<PatternSignal> {
        PatternEngine::detect_patterns(self, text, turn_index)
    }
}
