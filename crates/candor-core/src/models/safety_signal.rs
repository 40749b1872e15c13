use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Crisis categories, declared in priority order (highest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetySignalType {
    ImminentSelfHarm,
    ImminentHarmToOthers,
    ChildExploitationDisclosure,
    AcuteCrisis,
}

impl fmt::Display for SafetySignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SafetySignalType::ImminentSelfHarm => "imminent_self_harm",
            SafetySignalType::ImminentHarmToOthers => "imminent_harm_to_others",
            SafetySignalType::ChildExploitationDisclosure => "child_exploitation_disclosure",
            SafetySignalType::AcuteCrisis => "acute_crisis",
        };
        f.write_str(s)
    }
}

/// A crisis detected in a single turn. Its presence suppresses every other
/// output for that turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetySignal {
    pub signal_type: SafetySignalType,
    pub confidence: f64,
    pub turn_index: u32,
    pub timestamp: DateTime<Utc>,
}
