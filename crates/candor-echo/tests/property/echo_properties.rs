use candor_core::models::{EchoCategory, EchoPhrase};
use candor_echo::EchoEngine;
use proptest::prelude::*;

fn arb_echo() -> impl Strategy<Value = EchoPhrase> {
    (0u32..5, 0u32..40, any::<bool>()).prop_map(|(act, turn, used)| EchoPhrase {
        id: format!("e-{act}-{turn}-{used}"),
        phrase: "it just happened".to_string(),
        turn_index: turn,
        category: EchoCategory::AgencyDenial,
        eligible_after_act: act + 1,
        eligible_after_turn: turn + 4,
        used,
    })
}

proptest! {
    #[test]
    fn eligible_never_returns_used(
        echoes in prop::collection::vec(arb_echo(), 0..30),
        act in 0u32..8,
        turn in 0u32..60,
    ) {
        let engine = EchoEngine::new();
        for e in engine.eligible(&echoes, act, turn) {
            prop_assert!(!e.used);
        }
    }

    #[test]
    fn eligible_is_exactly_the_or_gate(
        echoes in prop::collection::vec(arb_echo(), 0..30),
        act in 0u32..8,
        turn in 0u32..60,
    ) {
        let engine = EchoEngine::new();
        let expected = echoes
            .iter()
            .filter(|e| !e.used && (act >= e.eligible_after_act || turn >= e.eligible_after_turn))
            .count();
        prop_assert_eq!(engine.eligible(&echoes, act, turn).len(), expected);
    }
}
