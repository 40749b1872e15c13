use candor_core::models::{
    ClaimEntry, ContradictionEntry, EpisodeState, LoopStatus, OpenLoop, PatternKind,
    PatternSignal, ResolutionStatus, SupportLevel,
};
use candor_inevitability::InevitabilityEngine;
use proptest::prelude::*;

fn build(patterns: usize, contradictions: usize, loop_priority: Option<u8>, contradicted: bool) -> EpisodeState {
    let mut state = EpisodeState::new("prop");
    for i in 0..patterns {
        let kind = PatternKind::ALL[i % PatternKind::ALL.len()];
        state.pattern_ledger.push(PatternSignal {
            kind,
            evidence_turns: vec![1, 2],
            confidence: 0.5,
            interpretation: String::new(),
            first_seen_turn: 1,
            last_seen_turn: 2,
            occurrence_count: 2,
        });
    }
    for i in 0..contradictions {
        state.contradiction_ledger.push(ContradictionEntry {
            id: format!("c{i}"),
            claim: String::new(),
            evidence: String::new(),
            turn_index: 0,
            resolution_status: ResolutionStatus::Unaddressed,
        });
    }
    if let Some(priority) = loop_priority {
        state.open_loops.push(OpenLoop {
            topic: "t".into(),
            priority,
            status: LoopStatus::Open,
            opened_turn: None,
        });
    }
    if contradicted {
        state.claims_ledger.push(ClaimEntry {
            id: "k".into(),
            statement: String::new(),
            turn_index: 0,
            support_level: SupportLevel::Contradicted,
        });
    }
    state
}

proptest! {
    #[test]
    fn score_is_bounded(
        p in 0usize..20,
        c in 0usize..20,
        l in proptest::option::of(0u8..=10),
        k in any::<bool>(),
    ) {
        let score = InevitabilityEngine::new().compute(&build(p, c, l, k)).score;
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn adding_evidence_never_lowers_the_score(
        p in 0usize..10,
        c in 0usize..10,
        l in proptest::option::of(0u8..=10),
        k in any::<bool>(),
    ) {
        let engine = InevitabilityEngine::new();
        let base = engine.compute(&build(p, c, l, k)).score;

        let more_patterns = engine.compute(&build(p + 1, c, l, k)).score;
        let more_contradictions = engine.compute(&build(p, c + 1, l, k)).score;
        let critical_loop = engine.compute(&build(p, c, Some(10), k)).score;
        let contradicted = engine.compute(&build(p, c, l, true)).score;

        prop_assert!(more_patterns >= base);
        prop_assert!(more_contradictions >= base);
        prop_assert!(critical_loop >= base);
        prop_assert!(contradicted >= base);
    }
}
