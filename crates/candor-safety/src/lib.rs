//! # candor-safety
//!
//! Highest-priority crisis screen. Runs before every other engine on each
//! turn; when it fires, the host delivers only the fixed safety response and
//! suppresses every other output for that turn.

pub mod engine;
pub mod responses;
pub mod rules;

pub use engine::SafetyEngine;
pub use rules::{SafetyRule, SafetyRuleSet};
