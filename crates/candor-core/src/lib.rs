//! # candor-core
//!
//! Foundation crate for the Candor interview signal engine.
//! Defines all types, traits, errors, config, and constants.
//! Every engine crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod rules;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CandorConfig;
pub use errors::{CandorError, CandorResult};
pub use models::{
    EchoPhrase, EpisodeState, PatternKind, PatternSignal, ReceiptCard, RevealPlan, SafetySignal,
    SafetySignalType, TimelineGap,
};
