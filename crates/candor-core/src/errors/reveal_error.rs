use crate::models::RevealStatus;

/// Reveal plan lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum RevealError {
    #[error("reveal plan {id} cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        id: String,
        from: RevealStatus,
        to: RevealStatus,
    },

    #[error("reveal plan {id} does not allow the subject to decline")]
    DeclineNotAllowed { id: String },
}
