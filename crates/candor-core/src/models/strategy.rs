use serde::{Deserialize, Serialize};

/// The host's conversational move for the next turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    Press,
    Probe,
    Mirror,
    Hold,
    Yield,
    SafetyGround,
}

/// The rhetorical device the host pairs with a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Device {
    DirectQuestion,
    EchoCallback,
    ReceiptTease,
    Silence,
    OfferAlternative,
    Grounding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

/// Live interview conditions a proposal is reviewed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalContext {
    /// Accumulated pressure on the subject, 0–10.
    pub pressure: u8,
    pub risk: RiskLevel,
}

/// Family of instruction text the content-standards rule rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannedTermCategory {
    DiagnosticLabel,
    AiSelfDisclosure,
    AbsoluteClinicalClaim,
}

/// Which link of the veto chain fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum VetoReason {
    SafetyPrecedence,
    ContentStandards { category: BannedTermCategory },
    PressureCeiling,
}

/// Governor verdict on a proposed strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpVeto {
    pub vetoed: bool,
    #[serde(default)]
    pub reason: Option<VetoReason>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub alternative_strategy: Option<Strategy>,
    #[serde(default)]
    pub alternative_device: Option<Device>,
}

impl SpVeto {
    pub fn approved() -> Self {
        Self {
            vetoed: false,
            reason: None,
            message: None,
            alternative_strategy: None,
            alternative_device: None,
        }
    }

    pub fn veto(
        reason: VetoReason,
        message: impl Into<String>,
        alternative_strategy: Strategy,
        alternative_device: Option<Device>,
    ) -> Self {
        Self {
            vetoed: true,
            reason: Some(reason),
            message: Some(message.into()),
            alternative_strategy: Some(alternative_strategy),
            alternative_device,
        }
    }
}
