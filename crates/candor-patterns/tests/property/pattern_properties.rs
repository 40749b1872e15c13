use std::collections::HashSet;

use candor_patterns::PatternEngine;
use proptest::prelude::*;

proptest! {
    #[test]
    fn detection_is_referentially_transparent(text in ".{0,200}", turn in 0u32..1000) {
        let engine = PatternEngine::new();
        prop_assert_eq!(engine.detect_patterns(&text, turn), engine.detect_patterns(&text, turn));
    }

    #[test]
    fn signals_carry_only_the_current_turn(text in "[a-zA-Z' ,.]{0,160}", turn in 0u32..1000) {
        let engine = PatternEngine::new();
        let signals = engine.detect_patterns(&text, turn);
        let mut seen = HashSet::new();
        for s in &signals {
            prop_assert!(seen.insert(s.kind), "kind {} emitted twice", s.kind);
            prop_assert_eq!(&s.evidence_turns, &vec![turn]);
            prop_assert_eq!(s.occurrence_count, 1);
            prop_assert!(s.confidence > 0.0 && s.confidence <= 0.95);
        }
    }
}
