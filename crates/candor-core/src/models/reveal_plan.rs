use serde::{Deserialize, Serialize};

use super::ReceiptCard;
use crate::errors::RevealError;

/// Lifecycle of a reveal plan.
///
/// ```text
/// pending ──► approved ──► delivered
///    │            │
///    └──► vetoed ◄┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealStatus {
    Pending,
    Approved,
    Vetoed,
    Delivered,
}

impl RevealStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, RevealStatus::Vetoed | RevealStatus::Delivered)
    }

    /// Whether `self -> to` is a legal lifecycle step.
    pub fn can_transition_to(self, to: RevealStatus) -> bool {
        matches!(
            (self, to),
            (RevealStatus::Pending, RevealStatus::Approved)
                | (RevealStatus::Pending, RevealStatus::Vetoed)
                | (RevealStatus::Approved, RevealStatus::Delivered)
                | (RevealStatus::Approved, RevealStatus::Vetoed)
        )
    }
}

/// Whether the subject must be asked before the evidence is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGate {
    pub required: bool,
    #[serde(default)]
    pub ask_copy: Option<String>,
}

/// What prompted a reveal to be proposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealTrigger {
    InevitabilityThreshold { score: f64 },
    Contradiction { contradiction_id: String },
    EchoCallback { echo_id: String },
    HostCue { note: String },
}

/// Conditions under which a pending or approved reveal must be dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VetoPolicy {
    pub abort_on_safety_signal: bool,
    pub subject_may_decline: bool,
    pub min_inevitability: f64,
}

impl Default for VetoPolicy {
    fn default() -> Self {
        Self {
            abort_on_safety_signal: true,
            subject_may_decline: true,
            min_inevitability: crate::constants::MIN_REVEAL_SCORE,
        }
    }
}

/// A structured, permission-gated plan to disclose one receipt card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealPlan {
    pub id: String,
    pub tease: String,
    pub permission_gate: PermissionGate,
    pub trigger: RevealTrigger,
    pub payload: ReceiptCard,
    pub integration_prompt: String,
    pub veto_policy: VetoPolicy,
    pub status: RevealStatus,
}

impl RevealPlan {
    /// Advance the plan's status, rejecting illegal lifecycle steps.
    pub fn transition(&mut self, to: RevealStatus) -> Result<(), RevealError> {
        if !self.status.can_transition_to(to) {
            return Err(RevealError::InvalidTransition {
                id: self.id.clone(),
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    /// The subject said no at the permission gate. Only plans that asked,
    /// and whose policy lets the subject decline, can be declined.
    pub fn decline(&mut self) -> Result<(), RevealError> {
        if !(self.permission_gate.required && self.veto_policy.subject_may_decline) {
            return Err(RevealError::DeclineNotAllowed {
                id: self.id.clone(),
            });
        }
        self.transition(RevealStatus::Vetoed)
    }
}

/// Outcome of a governor review of a reveal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealReview {
    pub vetoed: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

impl RevealReview {
    pub fn allowed() -> Self {
        Self {
            vetoed: false,
            reason: None,
        }
    }

    pub fn vetoed(reason: impl Into<String>) -> Self {
        Self {
            vetoed: true,
            reason: Some(reason.into()),
        }
    }
}
