use candor_core::config::GovernorConfig;
use candor_core::errors::RevealError;
use candor_core::models::{
    Device, ProposalContext, ReceiptKind, RevealPlan, RevealReview, RevealStatus, SpVeto,
    Strategy,
};

use crate::banned::BannedTermRuleSet;
use crate::checks::{Proposal, VetoCheck};

/// Standards & practices governor.
///
/// Stateless apart from its immutable rule table and limits; every verdict
/// is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct SpGovernor {
    banned: BannedTermRuleSet,
    config: GovernorConfig,
    chain: Vec<VetoCheck>,
}

impl SpGovernor {
    pub fn new() -> Self {
        Self::with_config(GovernorConfig::default())
    }

    pub fn with_config(config: GovernorConfig) -> Self {
        Self {
            banned: BannedTermRuleSet::standard(),
            config,
            chain: VetoCheck::CHAIN.to_vec(),
        }
    }

    pub fn with_rules(mut self, banned: BannedTermRuleSet) -> Self {
        self.banned = banned;
        self
    }

    pub fn config(&self) -> &GovernorConfig {
        &self.config
    }

    pub fn chain(&self) -> &[VetoCheck] {
        &self.chain
    }

    /// Run the veto chain over a proposed strategy. First link to fire wins.
    pub fn review_proposal(
        &self,
        strategy: Strategy,
        device: Device,
        instruction_text: &str,
        context: ProposalContext,
    ) -> SpVeto {
        self.review(&Proposal {
            strategy,
            device,
            instruction_text,
            context,
        })
    }

    pub fn review(&self, proposal: &Proposal<'_>) -> SpVeto {
        for check in &self.chain {
            if let Some(veto) = check.evaluate(proposal, &self.banned, &self.config) {
                tracing::warn!(
                    check = ?check,
                    proposed = ?proposal.strategy,
                    forced = ?veto.alternative_strategy,
                    "proposal vetoed"
                );
                return veto;
            }
        }
        SpVeto::approved()
    }

    /// Consent and groundwork gate for a reveal.
    ///
    /// A quote is never shown without the subject's permission, whatever the
    /// score. Any reveal below the minimum score (or the plan's own stricter
    /// floor) is premature.
    pub fn review_reveal(&self, plan: &RevealPlan, inevitability_score: f64) -> RevealReview {
        if plan.payload.kind() == ReceiptKind::Quote && !plan.permission_gate.required {
            tracing::warn!(plan = %plan.id, "quote reveal without permission gate vetoed");
            return RevealReview::vetoed("quote reveals require the subject's permission");
        }
        let floor = self
            .config
            .min_reveal_score
            .max(plan.veto_policy.min_inevitability);
        // NaN never clears the floor.
        if inevitability_score.is_nan() || inevitability_score < floor {
            tracing::warn!(
                plan = %plan.id,
                score = inevitability_score,
                floor,
                "reveal vetoed for insufficient groundwork"
            );
            return RevealReview::vetoed(format!(
                "insufficient groundwork: inevitability {inevitability_score:.2} below {floor:.2}"
            ));
        }
        RevealReview::allowed()
    }

    /// Review `plan` and move it to approved or vetoed accordingly.
    pub fn apply_reveal_review(
        &self,
        plan: &mut RevealPlan,
        inevitability_score: f64,
    ) -> Result<RevealReview, RevealError> {
        let review = self.review_reveal(plan, inevitability_score);
        let target = if review.vetoed {
            RevealStatus::Vetoed
        } else {
            RevealStatus::Approved
        };
        if plan.status != target {
            plan.transition(target)?;
        }
        if !review.vetoed {
            tracing::info!(plan = %plan.id, score = inevitability_score, "reveal approved");
        }
        Ok(review)
    }
}

impl Default for SpGovernor {
    fn default() -> Self {
        Self::new()
    }
}
