use candor_safety::SafetyEngine;
use proptest::prelude::*;

proptest! {
    /// A signal is raised exactly when some rule matches.
    #[test]
    fn signal_iff_some_rule_matches(text in ".{0,120}", turn in 0u32..500) {
        let engine = SafetyEngine::new();
        let any_rule = engine.rules().rules().iter().any(|r| r.is_match(&text));
        let signal = engine.detect(&text, turn);
        prop_assert_eq!(signal.is_some(), any_rule);
        if let Some(s) = signal {
            prop_assert_eq!(s.turn_index, turn);
            let first = engine.rules().first_match(&text).unwrap();
            prop_assert_eq!(s.signal_type, first.signal_type);
        }
    }

    #[test]
    fn crisis_phrase_detected_anywhere_in_text(
        prefix in "[a-z ]{0,40}",
        suffix in "[a-z ]{0,40}",
    ) {
        let engine = SafetyEngine::new();
        let text = format!("{prefix} i want to kill myself {suffix}");
        prop_assert!(engine.detect(&text, 1).is_some());
    }
}
