use crate::models::PatternSignal;

/// Stateless per-turn signal extraction.
pub trait IPatternDetector: Send + Sync {
    /// Every pattern present in `text`, carrying only this turn's evidence.
    fn detect_patterns(&self, text: &str, turn_index: u32) -> Vec<PatternSignal>;
}
