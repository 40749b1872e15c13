//! # candor-reveal
//!
//! Wraps a receipt card and a trigger into a [`RevealPlan`](candor_core::RevealPlan).
//! Construction only: whether a plan may be delivered is decided by the
//! inevitability score and the governor, never here.

pub mod copy;
pub mod engine;

pub use copy::{RevealCopy, RevealCopyTable, DEFAULT_ASK_COPY};
pub use engine::RevealEngine;
