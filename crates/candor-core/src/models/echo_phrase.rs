use serde::{Deserialize, Serialize};

/// What kind of self-revealing phrase an echo captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EchoCategory {
    Minimizer,
    Inevitability,
    Shame,
    AgencyDenial,
}

/// A quotable phrase the subject said, held back until a later act or turn.
///
/// Echoes are never deleted; `used` flips to `true` exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoPhrase {
    pub id: String,
    pub phrase: String,
    pub turn_index: u32,
    pub category: EchoCategory,
    pub eligible_after_act: u32,
    pub eligible_after_turn: u32,
    #[serde(default)]
    pub used: bool,
}

impl EchoPhrase {
    /// Unused, and either the act gate or the turn gate has opened.
    pub fn is_eligible(&self, current_act: u32, current_turn: u32) -> bool {
        !self.used
            && (current_act >= self.eligible_after_act || current_turn >= self.eligible_after_turn)
    }
}
