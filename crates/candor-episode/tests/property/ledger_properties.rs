use candor_core::models::{EpisodeState, PatternKind, PatternSignal};
use candor_episode::EpisodeLedger;
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = PatternKind> {
    (0usize..PatternKind::ALL.len()).prop_map(|i| PatternKind::ALL[i])
}

proptest! {
    #[test]
    fn ledger_entries_stay_consistent(
        turns in proptest::collection::vec(
            (0u32..30, proptest::collection::vec((kind(), 0.0f64..=1.0), 0..4)),
            0..25,
        )
    ) {
        let ledger = EpisodeLedger::new();
        let mut state = EpisodeState::new("prop");
        for (turn, detections) in &turns {
            let signals: Vec<_> = detections
                .iter()
                .map(|&(k, c)| PatternSignal::observed(k, *turn, c, ""))
                .collect();
            ledger.merge_patterns(&mut state, &signals, *turn);
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &state.pattern_ledger {
            prop_assert!(seen.insert(entry.kind), "one entry per kind");
            prop_assert_eq!(entry.occurrence_count as usize, entry.evidence_turns.len());
            let mut unique = entry.evidence_turns.clone();
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(unique.len(), entry.evidence_turns.len());
            prop_assert!(entry.confidence >= 0.0 && entry.confidence <= 0.95 + 1e-12);
            prop_assert!(entry.evidence_turns.contains(&entry.first_seen_turn));
            prop_assert!(entry.evidence_turns.contains(&entry.last_seen_turn));
        }
    }
}
