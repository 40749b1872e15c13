/// Episode ledger and turn sequencing errors.
#[derive(Debug, thiserror::Error)]
pub enum EpisodeError {
    #[error("turn {got} arrived out of order (last processed turn {expected_after})")]
    TurnOutOfOrder { expected_after: u32, got: u32 },

    #[error("echo phrase not found: {id}")]
    EchoNotFound { id: String },

    #[error("echo phrase {id} was already used")]
    EchoAlreadyUsed { id: String },

    #[error("contradiction not found: {id}")]
    ContradictionNotFound { id: String },

    #[error("open loop not found: {topic}")]
    OpenLoopNotFound { topic: String },

    #[error("open loop priority {priority} exceeds maximum {max}")]
    InvalidLoopPriority { priority: u8, max: u8 },
}
