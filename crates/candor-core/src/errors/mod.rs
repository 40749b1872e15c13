//! Error handling for Candor.
//! One error enum per subsystem, `thiserror` only. Expected rejections
//! (vetoes, safety holds) are data, never errors.

pub mod candor_error;
pub mod config_error;
pub mod episode_error;
pub mod reveal_error;
pub mod rule_error;
pub mod tapes_error;

pub use candor_error::{CandorError, CandorResult};
pub use config_error::ConfigError;
pub use episode_error::EpisodeError;
pub use reveal_error::RevealError;
pub use rule_error::RuleError;
pub use tapes_error::TapesError;
