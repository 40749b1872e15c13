use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    Unaddressed,
    Addressed,
}

/// A claim the subject made that held evidence disputes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionEntry {
    pub id: String,
    pub claim: String,
    pub evidence: String,
    pub turn_index: u32,
    pub resolution_status: ResolutionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportLevel {
    Supported,
    Unverified,
    Contradicted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimEntry {
    pub id: String,
    pub statement: String,
    pub turn_index: u32,
    pub support_level: SupportLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopStatus {
    Open,
    Closed,
}

/// A thread the interview opened and has not yet closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenLoop {
    pub topic: String,
    /// 0–10; 8 and above is critical.
    pub priority: u8,
    pub status: LoopStatus,
    #[serde(default)]
    pub opened_turn: Option<u32>,
}
