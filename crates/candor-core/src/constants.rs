/// Candor engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound for any heuristic detector confidence.
pub const DETECTOR_CONFIDENCE_CAP: f64 = 0.95;

/// Acts that must pass before a captured echo may be replayed.
pub const ECHO_ACT_DELAY: u32 = 1;

/// Turns that must pass before a captured echo may be replayed.
pub const ECHO_TURN_DELAY: u32 = 4;

/// Inevitability score at which held evidence may be revealed.
pub const REVEAL_THRESHOLD: f64 = 0.75;

/// Inevitability score at which a soft confrontation is justified.
pub const SOFT_CONFRONT_THRESHOLD: f64 = 0.5;

/// Inevitability score at which a firm confrontation is justified.
pub const FIRM_CONFRONT_THRESHOLD: f64 = 0.85;

/// Per-recurring-pattern weight and its cap.
pub const RECURRING_PATTERN_WEIGHT: f64 = 0.1;
pub const RECURRING_PATTERN_CAP: f64 = 0.3;

/// Occurrences needed before a pattern counts as recurring.
pub const RECURRING_PATTERN_MIN_OCCURRENCES: u32 = 2;

/// Per-unresolved-contradiction weight and its cap.
pub const CONTRADICTION_WEIGHT: f64 = 0.15;
pub const CONTRADICTION_CAP: f64 = 0.4;

/// Flat bonus when any critical open loop exists.
pub const CRITICAL_LOOP_BONUS: f64 = 0.2;

/// Open-loop priority at or above which a loop is critical.
pub const CRITICAL_LOOP_PRIORITY: u8 = 8;

/// Flat bonus when any claim has been contradicted.
pub const CONTRADICTED_CLAIM_BONUS: f64 = 0.25;

/// Shortest timeline gap (days, inclusive) flagged as a missing tape.
pub const MIN_GAP_DAYS: i64 = 180;

/// Pressure level at which PRESS is no longer allowed.
pub const PRESSURE_CEILING: u8 = 9;

/// Inevitability below which no reveal is allowed.
pub const MIN_REVEAL_SCORE: f64 = 0.5;

/// Confidence added each time a pattern recurs in the ledger.
pub const LEDGER_ESCALATION_STEP: f64 = 0.05;

/// Maximum priority accepted for an open loop.
pub const MAX_LOOP_PRIORITY: u8 = 10;
