//! # candor-tapes
//!
//! Finds the "missing tapes" in a subject's life: stretches of at least 180
//! days between consecutive timeline events with nothing recorded.

pub mod dates;
pub mod engine;

pub use engine::MissingTapesEngine;
