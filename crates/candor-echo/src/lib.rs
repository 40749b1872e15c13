//! # candor-echo
//!
//! Captures the subject's own self-revealing phrases so the host can hand
//! them back later. A captured echo is held until either the next act begins
//! or four turns have passed, whichever comes first.

pub mod engine;
pub mod rules;

pub use engine::EchoEngine;
pub use rules::{EchoRule, EchoRuleSet};
