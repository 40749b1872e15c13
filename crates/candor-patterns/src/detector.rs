use candor_core::errors::RuleError;
use candor_core::models::{PatternKind, PatternSignal};
use candor_core::rules;
use regex::Regex;

/// How a detector finds evidence in a turn.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Every non-overlapping match counts once.
    Regex(Regex),
    /// A non-empty turn of at most `max_words` words counts once.
    Brevity { max_words: usize },
}

impl Matcher {
    pub fn count(&self, text: &str) -> usize {
        match self {
            Matcher::Regex(re) => re.find_iter(text).count(),
            Matcher::Brevity { max_words } => {
                let words = rules::word_count(text);
                usize::from(words > 0 && words <= *max_words)
            }
        }
    }
}

/// One pure detector: text in, zero or one signal out.
#[derive(Debug, Clone)]
pub struct PatternDetector {
    pub kind: PatternKind,
    pub matcher: Matcher,
    pub base_confidence: f64,
    pub match_bonus: f64,
    pub interpretation: String,
}

impl PatternDetector {
    /// Build a regex-backed detector.
    pub fn regex(
        kind: PatternKind,
        pattern: &str,
        base_confidence: f64,
        match_bonus: f64,
        interpretation: impl Into<String>,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            kind,
            matcher: Matcher::Regex(rules::compile(kind.as_str(), pattern)?),
            base_confidence,
            match_bonus,
            interpretation: interpretation.into(),
        })
    }

    /// Confidence for `matches` hits, capped.
    pub fn confidence(&self, matches: usize, cap: f64) -> f64 {
        (self.base_confidence + self.match_bonus * matches as f64).min(cap)
    }

    pub fn detect(&self, text: &str, turn_index: u32, cap: f64) -> Option<PatternSignal> {
        let matches = self.matcher.count(text);
        if matches == 0 {
            return None;
        }
        Some(PatternSignal::observed(
            self.kind,
            turn_index,
            self.confidence(matches, cap),
            self.interpretation.clone(),
        ))
    }
}
