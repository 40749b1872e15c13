//! Tests for the episode ledger operations.

use candor_core::config::LedgerConfig;
use candor_core::errors::EpisodeError;
use candor_core::models::{
    EchoCategory, EchoPhrase, EpisodeState, LoopStatus, PatternKind, PatternSignal,
    ResolutionStatus, SupportLevel,
};
use candor_episode::EpisodeLedger;

fn signal(kind: PatternKind, turn: u32, confidence: f64) -> PatternSignal {
    PatternSignal::observed(kind, turn, confidence, format!("{kind} at turn {turn}"))
}

fn echo(id: &str) -> EchoPhrase {
    EchoPhrase {
        id: id.to_string(),
        phrase: "I had no choice".to_string(),
        turn_index: 1,
        category: EchoCategory::Inevitability,
        eligible_after_act: 1,
        eligible_after_turn: 5,
        used: false,
    }
}

#[test]
fn new_kinds_append_in_arrival_order() {
    let ledger = EpisodeLedger::new();
    let mut state = EpisodeState::new("ep");
    ledger.merge_patterns(
        &mut state,
        &[
            signal(PatternKind::ShameCue, 1, 0.5),
            signal(PatternKind::AbsolutistLanguage, 1, 0.4),
        ],
        1,
    );
    ledger.merge_patterns(&mut state, &[signal(PatternKind::FreezeCue, 2, 0.5)], 2);
    let kinds: Vec<_> = state.pattern_ledger.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PatternKind::ShameCue,
            PatternKind::AbsolutistLanguage,
            PatternKind::FreezeCue
        ]
    );
}

#[test]
fn recurrence_takes_the_stronger_confidence_plus_a_step() {
    let ledger = EpisodeLedger::new();
    let mut state = EpisodeState::new("ep");
    ledger.merge_patterns(&mut state, &[signal(PatternKind::ShameCue, 1, 0.5)], 1);
    ledger.merge_patterns(&mut state, &[signal(PatternKind::ShameCue, 3, 0.7)], 3);

    let entry = &state.pattern_ledger[0];
    assert_eq!(entry.evidence_turns, vec![1, 3]);
    assert_eq!(entry.occurrence_count, 2);
    assert_eq!(entry.last_seen_turn, 3);
    assert!((entry.confidence - 0.75).abs() < 1e-9);
    assert_eq!(entry.interpretation, "shame_cue at turn 3");
}

#[test]
fn escalation_is_capped() {
    let ledger = EpisodeLedger::new();
    let mut state = EpisodeState::new("ep");
    for turn in 0..10 {
        ledger.merge_patterns(&mut state, &[signal(PatternKind::FreezeCue, turn, 0.9)], turn);
    }
    let entry = &state.pattern_ledger[0];
    assert_eq!(entry.occurrence_count, 10);
    assert!((entry.confidence - 0.95).abs() < 1e-9);
}

#[test]
fn same_turn_is_counted_once() {
    let ledger = EpisodeLedger::new();
    let mut state = EpisodeState::new("ep");
    ledger.merge_patterns(&mut state, &[signal(PatternKind::ShameCue, 4, 0.5)], 4);
    ledger.merge_patterns(&mut state, &[signal(PatternKind::ShameCue, 4, 0.8)], 4);
    let entry = &state.pattern_ledger[0];
    assert_eq!(entry.evidence_turns, vec![4]);
    assert_eq!(entry.occurrence_count, 1);
    assert!((entry.confidence - 0.5).abs() < 1e-9);
}

#[test]
fn custom_escalation_step() {
    let ledger = EpisodeLedger::with_config(LedgerConfig {
        escalation_step: 0.2,
        confidence_cap: 0.8,
    });
    let mut state = EpisodeState::new("ep");
    ledger.merge_patterns(&mut state, &[signal(PatternKind::ShameCue, 1, 0.5)], 1);
    ledger.merge_patterns(&mut state, &[signal(PatternKind::ShameCue, 2, 0.5)], 2);
    assert!((state.pattern_ledger[0].confidence - 0.7).abs() < 1e-9);
    ledger.merge_patterns(&mut state, &[signal(PatternKind::ShameCue, 3, 0.5)], 3);
    assert!((state.pattern_ledger[0].confidence - 0.8).abs() < 1e-9);
}

#[test]
fn echoes_are_used_exactly_once() {
    let ledger = EpisodeLedger::new();
    let mut state = EpisodeState::new("ep");
    ledger.record_echoes(&mut state, vec![echo("e1"), echo("e2")]);

    let used = ledger.mark_echo_used(&mut state, "e1").unwrap();
    assert!(used.used);
    assert!(matches!(
        ledger.mark_echo_used(&mut state, "e1"),
        Err(EpisodeError::EchoAlreadyUsed { .. })
    ));
    assert!(matches!(
        ledger.mark_echo_used(&mut state, "missing"),
        Err(EpisodeError::EchoNotFound { .. })
    ));
    // Used echoes stay in the ledger.
    assert_eq!(state.echo_phrases.len(), 2);
    assert!(!state.echo_phrases[1].used);
}

#[test]
fn contradictions_are_addressed_not_removed() {
    let ledger = EpisodeLedger::new();
    let mut state = EpisodeState::new("ep");
    let id = ledger.add_contradiction(&mut state, "I never met him", "Photo together", 3);
    assert_eq!(state.unresolved_contradictions().count(), 1);

    ledger.address_contradiction(&mut state, &id).unwrap();
    assert_eq!(state.unresolved_contradictions().count(), 0);
    assert_eq!(state.contradiction_ledger.len(), 1);
    assert_eq!(
        state.contradiction_ledger[0].resolution_status,
        ResolutionStatus::Addressed
    );

    assert!(matches!(
        ledger.address_contradiction(&mut state, "nope"),
        Err(EpisodeError::ContradictionNotFound { .. })
    ));
}

#[test]
fn claims_get_unique_ids() {
    let ledger = EpisodeLedger::new();
    let mut state = EpisodeState::new("ep");
    let a = ledger.add_claim(&mut state, "I was at home", 1, SupportLevel::Unverified);
    let b = ledger.add_claim(&mut state, "I was alone", 2, SupportLevel::Contradicted);
    assert_ne!(a, b);
    assert!(state.has_contradicted_claim());
}

#[test]
fn loops_open_close_and_reopen() {
    let ledger = EpisodeLedger::new();
    let mut state = EpisodeState::new("ep");
    ledger.open_loop(&mut state, "the letter", 9, 2).unwrap();
    assert!(state.has_critical_open_loop(8));

    ledger.close_loop(&mut state, "the letter").unwrap();
    assert!(!state.has_critical_open_loop(8));
    assert_eq!(state.open_loops[0].status, LoopStatus::Closed);

    ledger.open_loop(&mut state, "the letter", 5, 7).unwrap();
    assert_eq!(state.open_loops.len(), 1);
    assert_eq!(state.open_loops[0].status, LoopStatus::Open);
    assert_eq!(state.open_loops[0].priority, 5);
    assert_eq!(state.open_loops[0].opened_turn, Some(7));

    assert!(matches!(
        ledger.close_loop(&mut state, "the car"),
        Err(EpisodeError::OpenLoopNotFound { .. })
    ));
    assert!(matches!(
        ledger.open_loop(&mut state, "the car", 11, 8),
        Err(EpisodeError::InvalidLoopPriority {
            priority: 11,
            max: 10
        })
    ));
}
