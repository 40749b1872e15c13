use candor_core::models::{
    PermissionGate, ReceiptCard, RevealPlan, RevealStatus, RevealTrigger, VetoPolicy,
};

use crate::copy::{RevealCopyTable, DEFAULT_ASK_COPY};

/// Reveal plan factory.
///
/// The same receipt can be wrapped into several candidate plans (different
/// triggers, with or without consent) without re-deriving any text.
#[derive(Debug, Clone, Default)]
pub struct RevealEngine {
    copy: RevealCopyTable,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_copy(copy: RevealCopyTable) -> Self {
        Self { copy }
    }

    pub fn copy(&self) -> &RevealCopyTable {
        &self.copy
    }

    /// Build a pending plan for `receipt`.
    pub fn create_reveal_plan(
        &self,
        id: impl Into<String>,
        receipt: ReceiptCard,
        trigger: RevealTrigger,
        require_permission: bool,
    ) -> RevealPlan {
        let id = id.into();
        let copy = self.copy.lookup(receipt.kind());
        tracing::debug!(
            plan = %id,
            kind = ?receipt.kind(),
            require_permission,
            "reveal plan created"
        );
        RevealPlan {
            id,
            tease: copy.tease.clone(),
            permission_gate: PermissionGate {
                required: require_permission,
                ask_copy: require_permission.then(|| DEFAULT_ASK_COPY.to_string()),
            },
            trigger,
            payload: receipt,
            integration_prompt: copy.integration_prompt.clone(),
            veto_policy: VetoPolicy::default(),
            status: RevealStatus::Pending,
        }
    }
}
