//! Ordered set of detectors run against every turn.

use candor_core::config::PatternConfig;
use candor_core::models::PatternKind;

use crate::catalog;
use crate::detector::{Matcher, PatternDetector};

/// Immutable detector table. Output order follows table order.
#[derive(Debug, Clone)]
pub struct DetectorRegistry {
    detectors: Vec<PatternDetector>,
}

impl DetectorRegistry {
    /// The eleven built-in detectors, in [`PatternKind::ALL`] order.
    pub fn standard(config: &PatternConfig) -> Self {
        let mut detectors: Vec<PatternDetector> = catalog::REGEX_DETECTORS
            .iter()
            .filter_map(|spec| {
                match PatternDetector::regex(
                    spec.kind,
                    spec.pattern,
                    spec.base_confidence,
                    spec.match_bonus,
                    spec.interpretation,
                ) {
                    Ok(d) => Some(d),
                    Err(e) => {
                        tracing::error!(
                            kind = %spec.kind,
                            error = %e,
                            "built-in detector failed to compile"
                        );
                        None
                    }
                }
            })
            .collect();

        detectors.push(PatternDetector {
            kind: PatternKind::BrevitySpike,
            matcher: Matcher::Brevity {
                max_words: config.brevity_max_words,
            },
            base_confidence: catalog::BREVITY_BASE_CONFIDENCE,
            match_bonus: catalog::BREVITY_MATCH_BONUS,
            interpretation: catalog::BREVITY_INTERPRETATION.to_string(),
        });

        Self { detectors }
    }

    /// A custom table, for tests or deployment variants.
    pub fn from_detectors(detectors: Vec<PatternDetector>) -> Self {
        Self { detectors }
    }

    pub fn detectors(&self) -> &[PatternDetector] {
        &self.detectors
    }

    pub fn kinds(&self) -> impl Iterator<Item = PatternKind> + '_ {
        self.detectors.iter().map(|d| d.kind)
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::standard(&PatternConfig::default())
    }
}
