use candor_core::config::GovernorConfig;
use candor_core::models::{Device, ProposalContext, RiskLevel, SpVeto, Strategy, VetoReason};

use crate::banned::BannedTermRuleSet;

/// A host action awaiting review.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proposal<'a> {
    pub strategy: Strategy,
    pub device: Device,
    pub instruction_text: &'a str,
    pub context: ProposalContext,
}

/// One link of the veto chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VetoCheck {
    /// Critical risk overrides any strategy but grounding.
    SafetyPrecedence,
    /// Instruction text may not carry a banned term.
    ContentStandards,
    /// No pressing once pressure reaches the ceiling.
    PressureCeiling,
}

impl VetoCheck {
    /// Chain order. Earlier links take precedence.
    pub const CHAIN: [VetoCheck; 3] = [
        VetoCheck::SafetyPrecedence,
        VetoCheck::ContentStandards,
        VetoCheck::PressureCeiling,
    ];

    /// `Some(veto)` when this link fires for `proposal`.
    pub fn evaluate(
        self,
        proposal: &Proposal<'_>,
        banned: &BannedTermRuleSet,
        config: &GovernorConfig,
    ) -> Option<SpVeto> {
        match self {
            VetoCheck::SafetyPrecedence => (proposal.context.risk == RiskLevel::Critical
                && proposal.strategy != Strategy::SafetyGround)
                .then(|| {
                    SpVeto::veto(
                        VetoReason::SafetyPrecedence,
                        "critical risk: only safety grounding is permitted",
                        Strategy::SafetyGround,
                        Some(Device::Grounding),
                    )
                }),
            VetoCheck::ContentStandards => {
                banned.first_match(proposal.instruction_text).map(|rule| {
                    SpVeto::veto(
                        VetoReason::ContentStandards {
                            category: rule.category,
                        },
                        format!("instruction text violates content standards ({})", rule.name),
                        Strategy::Hold,
                        Some(Device::Silence),
                    )
                })
            }
            VetoCheck::PressureCeiling => (proposal.strategy == Strategy::Press
                && proposal.context.pressure >= config.pressure_ceiling)
                .then(|| {
                    SpVeto::veto(
                        VetoReason::PressureCeiling,
                        format!(
                            "pressure {} at or above ceiling {}: de-escalate",
                            proposal.context.pressure, config.pressure_ceiling
                        ),
                        Strategy::Yield,
                        Some(Device::OfferAlternative),
                    )
                }),
        }
    }
}
