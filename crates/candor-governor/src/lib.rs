//! # candor-governor
//!
//! Final arbiter over everything the host wants to do next. Strategy
//! proposals run through an ordered veto chain (safety, then content
//! standards, then pressure) where the first link that fires decides the
//! outcome. Reveal plans pass a second, independent gate on consent and
//! inevitability.

pub mod banned;
pub mod checks;
pub mod engine;

pub use banned::{BannedTermRule, BannedTermRuleSet};
pub use checks::{Proposal, VetoCheck};
pub use engine::SpGovernor;
