//! Fixed safety messages. These are never rewritten by the dialogue model.

use candor_core::models::SafetySignalType;

pub const SELF_HARM_RESPONSE: &str = "I'm going to pause the interview here, because what you just said matters more than anything we're recording. If you are thinking about ending your life or hurting yourself, please call or text 988 (the Suicide & Crisis Lifeline in the US) or your local emergency number right now. You don't have to carry this alone.";

pub const HARM_TO_OTHERS_RESPONSE: &str = "I'm stopping the interview here. If anyone is in immediate danger, please contact your local emergency number now. We won't continue recording until everyone is safe.";

pub const CHILD_EXPLOITATION_RESPONSE: &str = "I'm pausing the interview. What you've shared is serious and deserves care beyond this conversation. If a child is at risk, please contact local emergency services or the Childhelp National Child Abuse Hotline at 1-800-422-4453. If this happened to you, a trained counselor there can talk with you too.";

pub const ACUTE_CRISIS_RESPONSE: &str = "Let's stop for a moment. There's no rush and nothing you have to answer. Take a slow breath with me. If you're feeling overwhelmed or unsafe, you can call or text 988, or your local emergency number, at any time.";

/// The one message the host may deliver for a signal of this type.
pub fn response_for(signal_type: SafetySignalType) -> &'static str {
    match signal_type {
        SafetySignalType::ImminentSelfHarm => SELF_HARM_RESPONSE,
        SafetySignalType::ImminentHarmToOthers => HARM_TO_OTHERS_RESPONSE,
        SafetySignalType::ChildExploitationDisclosure => CHILD_EXPLOITATION_RESPONSE,
        SafetySignalType::AcuteCrisis => ACUTE_CRISIS_RESPONSE,
    }
}
