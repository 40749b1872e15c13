use super::{ConfigError, EpisodeError, RevealError, RuleError, TapesError};

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum CandorError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("rule error: {0}")]
    RuleError(#[from] RuleError),

    #[error("timeline error: {0}")]
    TapesError(#[from] TapesError),

    #[error("reveal error: {0}")]
    RevealError(#[from] RevealError),

    #[error("episode error: {0}")]
    EpisodeError(#[from] EpisodeError),
}

pub type CandorResult<T> = Result<T, CandorError>;
