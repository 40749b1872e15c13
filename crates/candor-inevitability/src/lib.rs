//! # candor-inevitability
//!
//! Fuses the episode's ledgers into one scalar readiness score in [0, 1]
//! plus the fixed reveal / soft-confront / firm-confront thresholds.

pub mod engine;
pub mod formula;

pub use engine::InevitabilityEngine;
pub use formula::InevitabilityBreakdown;
