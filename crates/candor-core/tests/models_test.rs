use candor_core::models::*;
use chrono::NaiveDate;

#[test]
fn pattern_kinds_serialize_snake_case() {
    for kind in PatternKind::ALL {
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json, kind.as_str());
    }
}

#[test]
fn observed_signal_clamps_confidence() {
    let s = PatternSignal::observed(PatternKind::ShameCue, 4, 1.7, "x");
    assert_eq!(s.confidence, 1.0);
    assert_eq!(s.evidence_turns, vec![4]);
    assert_eq!(s.occurrence_count, 1);
    assert!(!s.is_recurring(2));
}

#[test]
fn safety_types_order_by_priority() {
    assert!(SafetySignalType::ImminentSelfHarm < SafetySignalType::ImminentHarmToOthers);
    assert!(SafetySignalType::ImminentHarmToOthers < SafetySignalType::ChildExploitationDisclosure);
    assert!(SafetySignalType::ChildExploitationDisclosure < SafetySignalType::AcuteCrisis);
    assert_eq!(
        SafetySignalType::ChildExploitationDisclosure.to_string(),
        "child_exploitation_disclosure"
    );
}

#[test]
fn echo_eligibility_uses_either_gate() {
    let mut echo = EchoPhrase {
        id: "e".into(),
        phrase: "it was nothing".into(),
        turn_index: 2,
        category: EchoCategory::Minimizer,
        eligible_after_act: 1,
        eligible_after_turn: 6,
        used: false,
    };
    assert!(!echo.is_eligible(0, 5));
    assert!(echo.is_eligible(1, 3));
    assert!(echo.is_eligible(0, 6));
    echo.used = true;
    assert!(!echo.is_eligible(5, 50));
}

#[test]
fn receipt_cards_are_type_tagged() {
    let card = ReceiptCard::TimelineSnap {
        date: NaiveDate::from_ymd_opt(2012, 7, 4).unwrap(),
        title: "Moved out".into(),
        description: "Left the house on Elm St".into(),
    };
    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["type"], "timeline_snap");
    assert_eq!(json["date"], "2012-07-04");
    assert_eq!(card.kind(), ReceiptKind::TimelineSnap);

    let quote: ReceiptCard =
        serde_json::from_str(r#"{"type":"quote","text":"hi","speaker":"subject"}"#).unwrap();
    assert_eq!(quote.kind(), ReceiptKind::Quote);
}

#[test]
fn reveal_status_lifecycle() {
    use RevealStatus::*;
    assert!(Pending.can_transition_to(Approved));
    assert!(Pending.can_transition_to(Vetoed));
    assert!(Approved.can_transition_to(Delivered));
    assert!(Approved.can_transition_to(Vetoed));
    assert!(!Pending.can_transition_to(Delivered));
    assert!(!Vetoed.can_transition_to(Approved));
    assert!(!Delivered.can_transition_to(Vetoed));
    assert!(Vetoed.is_terminal() && Delivered.is_terminal());
    assert!(!Pending.is_terminal() && !Approved.is_terminal());
}

fn plan(required: bool) -> RevealPlan {
    RevealPlan {
        id: "p".into(),
        tease: "t".into(),
        permission_gate: PermissionGate {
            required,
            ask_copy: None,
        },
        trigger: RevealTrigger::HostCue { note: "n".into() },
        payload: ReceiptCard::Photo {
            asset_ref: "a".into(),
            caption: "c".into(),
            taken_on: None,
        },
        integration_prompt: "i".into(),
        veto_policy: VetoPolicy::default(),
        status: RevealStatus::Pending,
    }
}

#[test]
fn decline_vetoes_a_gated_plan() {
    let mut gated = plan(true);
    gated.decline().unwrap();
    assert_eq!(gated.status, RevealStatus::Vetoed);

    let mut ungated = plan(false);
    assert!(matches!(
        ungated.decline(),
        Err(candor_core::errors::RevealError::DeclineNotAllowed { .. })
    ));

    let mut locked = plan(true);
    locked.veto_policy.subject_may_decline = false;
    assert!(locked.decline().is_err());
    assert_eq!(locked.status, RevealStatus::Pending);
}

#[test]
fn strategies_serialize_screaming_case() {
    assert_eq!(
        serde_json::to_value(Strategy::SafetyGround).unwrap(),
        "SAFETY_GROUND"
    );
    let reason = VetoReason::ContentStandards {
        category: BannedTermCategory::AiSelfDisclosure,
    };
    let json = serde_json::to_value(reason).unwrap();
    assert_eq!(json["rule"], "content_standards");
    assert_eq!(json["category"], "ai_self_disclosure");
}

#[test]
fn readiness_checks_highest_threshold_first() {
    let thresholds = Thresholds {
        reveal: 0.75,
        soft_confront: 0.5,
        firm_confront: 0.85,
    };
    let at = |score| InevitabilityResult {
        score,
        rationale: String::new(),
        thresholds,
    }
    .readiness();
    assert_eq!(at(0.0), Readiness::Hold);
    assert_eq!(at(0.49), Readiness::Hold);
    assert_eq!(at(0.5), Readiness::SoftConfront);
    assert_eq!(at(0.75), Readiness::Reveal);
    assert_eq!(at(0.85), Readiness::FirmConfront);
    assert_eq!(at(1.0), Readiness::FirmConfront);
}

#[test]
fn episode_state_queries() {
    let mut state = EpisodeState::new("ep");
    assert!(!state.current_turn_in_crisis());
    assert_eq!(state.last_safety_turn(), None);

    state.current_turn = Some(3);
    state.safety_signals.push(SafetySignal {
        signal_type: SafetySignalType::AcuteCrisis,
        confidence: 0.8,
        turn_index: 3,
        timestamp: chrono::Utc::now(),
    });
    assert!(state.current_turn_in_crisis());
    state.current_turn = Some(4);
    assert!(!state.current_turn_in_crisis());
    assert_eq!(state.last_safety_turn(), Some(3));
}

#[test]
fn episode_state_defaults_missing_fields() {
    let state: EpisodeState = serde_json::from_str(r#"{"episode_id":"ep-9"}"#).unwrap();
    assert_eq!(state.episode_id, "ep-9");
    assert_eq!(state.current_turn, None);
    assert!(state.pattern_ledger.is_empty());
}
