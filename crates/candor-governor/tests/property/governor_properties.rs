use candor_core::models::{
    Device, ProposalContext, ReceiptCard, RevealTrigger, RiskLevel, Strategy as Move, VetoReason,
};
use candor_governor::SpGovernor;
use candor_reveal::RevealEngine;
use proptest::prelude::*;

fn non_grounding_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        Just(Move::Press),
        Just(Move::Probe),
        Just(Move::Mirror),
        Just(Move::Hold),
        Just(Move::Yield),
    ]
}

fn risk() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Moderate),
        Just(RiskLevel::High),
        Just(RiskLevel::Critical),
    ]
}

proptest! {
    #[test]
    fn critical_risk_always_forces_grounding(
        proposed in non_grounding_move(),
        pressure in 0u8..=10,
        text in ".{0,80}",
    ) {
        let veto = SpGovernor::new().review_proposal(
            proposed,
            Device::DirectQuestion,
            &text,
            ProposalContext { pressure, risk: RiskLevel::Critical },
        );
        prop_assert!(veto.vetoed);
        prop_assert_eq!(veto.reason, Some(VetoReason::SafetyPrecedence));
        prop_assert_eq!(veto.alternative_strategy, Some(Move::SafetyGround));
    }

    #[test]
    fn every_veto_names_an_alternative(
        proposed in non_grounding_move(),
        pressure in 0u8..=10,
        risk in risk(),
        text in "[a-z ]{0,60}",
    ) {
        let veto = SpGovernor::new().review_proposal(
            proposed,
            Device::DirectQuestion,
            &text,
            ProposalContext { pressure, risk },
        );
        prop_assert_eq!(veto.vetoed, veto.alternative_strategy.is_some());
        prop_assert_eq!(veto.vetoed, veto.reason.is_some());
    }

    #[test]
    fn ungated_quote_is_vetoed_at_any_score(score in 0.0f64..=1.0) {
        let plan = RevealEngine::new().create_reveal_plan(
            "p",
            ReceiptCard::Quote {
                text: "I was home all night".into(),
                speaker: "subject".into(),
                source: None,
                turn_index: Some(1),
            },
            RevealTrigger::InevitabilityThreshold { score },
            false,
        );
        prop_assert!(SpGovernor::new().review_reveal(&plan, score).vetoed);
    }

    #[test]
    fn reveals_below_minimum_score_are_vetoed(score in 0.0f64..0.5) {
        let plan = RevealEngine::new().create_reveal_plan(
            "p",
            ReceiptCard::Photo {
                asset_ref: "asset://1".into(),
                caption: "c".into(),
                taken_on: None,
            },
            RevealTrigger::InevitabilityThreshold { score },
            true,
        );
        prop_assert!(SpGovernor::new().review_reveal(&plan, score).vetoed);
    }
}
