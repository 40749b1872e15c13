pub mod echo_phrase;
pub mod episode_state;
pub mod inevitability;
pub mod ledger;
pub mod pattern_signal;
pub mod receipt_card;
pub mod reveal_plan;
pub mod safety_signal;
pub mod strategy;
pub mod timeline;

pub use echo_phrase::{EchoCategory, EchoPhrase};
pub use episode_state::EpisodeState;
pub use inevitability::{InevitabilityResult, Readiness, Thresholds};
pub use ledger::{
    ClaimEntry, ContradictionEntry, LoopStatus, OpenLoop, ResolutionStatus, SupportLevel,
};
pub use pattern_signal::{PatternKind, PatternSignal};
pub use receipt_card::{ReceiptCard, ReceiptKind};
pub use reveal_plan::{
    PermissionGate, RevealPlan, RevealReview, RevealStatus, RevealTrigger, VetoPolicy,
};
pub use safety_signal::{SafetySignal, SafetySignalType};
pub use strategy::{
    BannedTermCategory, Device, ProposalContext, RiskLevel, SpVeto, Strategy, VetoReason,
};
pub use timeline::{TimelineEntry, TimelineGap};
