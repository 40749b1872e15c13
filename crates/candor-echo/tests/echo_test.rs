//! Tests for candor-echo: capture, gates, eligibility.

use candor_core::config::EchoConfig;
use candor_core::models::{EchoCategory, EchoPhrase};
use candor_echo::{EchoEngine, EchoRule, EchoRuleSet};

fn echo(id: &str, act_gate: u32, turn_gate: u32, used: bool) -> EchoPhrase {
    EchoPhrase {
        id: id.to_string(),
        phrase: "it was nothing".to_string(),
        turn_index: 0,
        category: EchoCategory::Minimizer,
        eligible_after_act: act_gate,
        eligible_after_turn: turn_gate,
        used,
    }
}

#[test]
fn capture_sets_both_gates() {
    let engine = EchoEngine::new();
    let echoes = engine.capture("Honestly, it was nothing.", 6, 1);
    assert_eq!(echoes.len(), 1);
    let e = &echoes[0];
    assert_eq!(e.phrase, "it was nothing");
    assert_eq!(e.category, EchoCategory::Minimizer);
    assert_eq!(e.turn_index, 6);
    assert_eq!(e.eligible_after_act, 2);
    assert_eq!(e.eligible_after_turn, 10);
    assert!(!e.used);
}

#[test]
fn capture_preserves_spoken_casing() {
    let engine = EchoEngine::new();
    let echoes = engine.capture("I Had No Choice, you understand?", 0, 0);
    assert_eq!(echoes.len(), 1);
    assert_eq!(echoes[0].phrase, "I Had No Choice");
    assert_eq!(echoes[0].category, EchoCategory::Inevitability);
}

#[test]
fn each_category_is_captured() {
    let engine = EchoEngine::new();
    let cases = [
        ("It's not a big deal.", EchoCategory::Minimizer),
        ("It was bound to happen.", EchoCategory::Inevitability),
        ("It was all my fault.", EchoCategory::Shame),
        ("They made me sign it.", EchoCategory::AgencyDenial),
    ];
    for (text, category) in cases {
        let echoes = engine.capture(text, 0, 0);
        assert!(
            echoes.iter().any(|e| e.category == category),
            "{category:?} not captured from {text:?}"
        );
    }
}

#[test]
fn multiple_matches_create_multiple_echoes_with_distinct_ids() {
    let engine = EchoEngine::new();
    let echoes = engine.capture("It just happened. It was all my fault. It just happened.", 3, 0);
    assert_eq!(echoes.len(), 3);
    assert_ne!(echoes[0].id, echoes[1].id);
    assert_ne!(echoes[1].id, echoes[2].id);
}

#[test]
fn no_match_captures_nothing() {
    let engine = EchoEngine::new();
    assert!(engine.capture("We drove to the lake that weekend.", 1, 0).is_empty());
}

#[test]
fn eligible_after_turn_gate_alone() {
    let engine = EchoEngine::new();
    let echoes = vec![echo("a", 2, 10, false)];
    assert!(engine.eligible(&echoes, 1, 9).is_empty());
    assert_eq!(engine.eligible(&echoes, 1, 10).len(), 1);
}

#[test]
fn eligible_after_act_gate_alone() {
    let engine = EchoEngine::new();
    let echoes = vec![echo("a", 2, 10, false)];
    assert!(engine.eligible(&echoes, 1, 7).is_empty());
    assert_eq!(engine.eligible(&echoes, 2, 7).len(), 1);
}

#[test]
fn used_echoes_are_never_eligible() {
    let engine = EchoEngine::new();
    let echoes = vec![echo("a", 0, 0, true), echo("b", 0, 0, false)];
    let eligible = engine.eligible(&echoes, 5, 50);
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].id, "b");
}

#[test]
fn custom_delays_follow_config() {
    let engine = EchoEngine::with_config(EchoConfig {
        act_delay: 2,
        turn_delay: 10,
    });
    let echoes = engine.capture("it was nothing", 5, 1);
    assert_eq!(echoes[0].eligible_after_act, 3);
    assert_eq!(echoes[0].eligible_after_turn, 15);
}

#[test]
fn custom_rule_set() {
    let rules = EchoRuleSet::from_rules(vec![EchoRule::new(
        "sorry",
        EchoCategory::Shame,
        r"(?i)\bsorry\b",
    )
    .unwrap()]);
    let engine = EchoEngine::with_rules(rules, EchoConfig::default());
    let echoes = engine.capture("Sorry, sorry.", 0, 0);
    assert_eq!(echoes.len(), 2);
    assert!(echoes.iter().all(|e| e.category == EchoCategory::Shame));
}
