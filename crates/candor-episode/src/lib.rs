//! # candor-episode
//!
//! Owns the per-episode evidence record. [`EpisodeLedger`] applies every
//! mutation to an [`EpisodeState`](candor_core::EpisodeState);
//! [`TurnPipeline`] sequences the engines over one turn at a time and holds
//! the safety precedence contract: a turn that raises a safety signal yields
//! only the fixed safety response.

pub mod ledger;
pub mod pipeline;
pub mod report;

pub use ledger::EpisodeLedger;
pub use pipeline::TurnPipeline;
pub use report::{TurnReport, TurnSignals};
