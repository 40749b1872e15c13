//! # candor-patterns
//!
//! Stateless multi-detector signal extraction over raw turn text.
//!
//! Eleven independent, non-exclusive detectors run against every turn. Each
//! returns zero or one signal with confidence `min(cap, base + bonus × matches)`.
//! Cross-turn accumulation is the episode ledger's job, not this crate's.

pub mod catalog;
pub mod detector;
pub mod engine;
pub mod registry;

pub use detector::{Matcher, PatternDetector};
pub use engine::PatternEngine;
pub use registry::DetectorRegistry;
