//! Built-in detector definitions.
//!
//! Confidences are fixed heuristics, not calibrated against data.

use candor_core::models::PatternKind;

/// A regex detector definition: kind, pattern, base confidence, per-match
/// bonus, interpretation note.
pub struct DetectorSpec {
    pub kind: PatternKind,
    pub pattern: &'static str,
    pub base_confidence: f64,
    pub match_bonus: f64,
    pub interpretation: &'static str,
}

// ── Evasion ────────────────────────────────────────────────────────────────

pub const MINIMIZATION: DetectorSpec = DetectorSpec {
    kind: PatternKind::MinimizationLanguage,
    pattern: r"(?i)\b(?:not\s+(?:a|that)\s+big\s+(?:deal|thing)|no\s+big\s+deal|not\s+that\s+bad|just\s+a\s+(?:little|bit|phase)|only\s+(?:a\s+little|once|a\s+few\s+times)|it\s+was\s+nothing|doesn['’]?t\s+(?:really\s+)?matter|could\s+have\s+been\s+worse|whatever)\b",
    base_confidence: 0.5,
    match_bonus: 0.1,
    interpretation: "Subject is downplaying the weight of what they describe.",
};

pub const HUMOR_DEFLECTION: DetectorSpec = DetectorSpec {
    kind: PatternKind::HumorDeflection,
    pattern: r"(?i)\b(?:ha(?:ha)+|he(?:he)+|lol|lmao|just\s+kidding|i['’]?m\s+joking|funny\s+(?:thing|story)|you\s+(?:have|gotta)\s+laugh)\b|[\(\[]laughs?[\)\]]",
    base_confidence: 0.5,
    match_bonus: 0.1,
    interpretation: "Subject is using humor to step away from the question.",
};

pub const FUTURE_TENSE_EVASION: DetectorSpec = DetectorSpec {
    kind: PatternKind::FutureTenseEvasion,
    pattern: r"(?i)\b(?:we['’]?ll\s+(?:get\s+to|see\s+about|talk\s+about)|i['’]?ll\s+(?:get\s+to|tell\s+you\s+later|come\s+back\s+to)|maybe\s+(?:later|another\s+time|next\s+time)|some\s+other\s+time|let['’]?s\s+(?:come\s+back\s+to|move\s+on|save\s+that)|not\s+right\s+now)\b",
    base_confidence: 0.5,
    match_bonus: 0.1,
    interpretation: "Subject is deferring the topic to an unspecified later moment.",
};

// ── Agency ─────────────────────────────────────────────────────────────────

pub const ABSOLUTIST: DetectorSpec = DetectorSpec {
    kind: PatternKind::AbsolutistLanguage,
    pattern: r"(?i)\b(?:always|never|everyone|everybody|nobody|no\s+one|nothing|everything|completely|totally|entirely|forever)\b",
    base_confidence: 0.35,
    match_bonus: 0.1,
    interpretation: "All-or-nothing framing; often marks a rehearsed or defended position.",
};

pub const PASSIVE_VOICE_SHIFT: DetectorSpec = DetectorSpec {
    kind: PatternKind::PassiveVoiceShift,
    pattern: r"(?i)\b(?:was|were|been|being|got)\s+(?:\w+ly\s+)?(?:\w+ed|done|made|said|told|taken|given|thrown|kept|forgotten|broken)\b",
    base_confidence: 0.4,
    match_bonus: 0.1,
    interpretation: "Narration shifted to passive voice, moving the subject out of the action.",
};

pub const ACTOR_OMISSION: DetectorSpec = DetectorSpec {
    kind: PatternKind::ActorOmission,
    pattern: r"(?i)\b(?:mistakes\s+were\s+made|things\s+(?:happened|got\s+(?:out\s+of\s+hand|messy|heated))|it\s+(?:just\s+)?happened|stuff\s+went\s+down|words\s+were\s+exchanged|it\s+got\s+(?:physical|ugly|out\s+of\s+hand)|some(?:one|body)\s+got\s+hurt)\b",
    base_confidence: 0.55,
    match_bonus: 0.1,
    interpretation: "Events are described without anyone doing them.",
};

pub const INEVITABILITY: DetectorSpec = DetectorSpec {
    kind: PatternKind::InevitabilityLanguage,
    pattern: r"(?i)\b(?:had\s+no\s+(?:choice|option)|no\s+other\s+(?:choice|option|way)|(?:was|were)\s+(?:always\s+)?(?:going|bound|meant|destined)\s+to|bound\s+to\s+happen|meant\s+to\s+be|inevitable|nothing\s+(?:i|we)\s+could\s+(?:have\s+)?do(?:ne)?|couldn['’]?t\s+have\s+(?:stopped|changed|prevented)\s+it|it\s+was\s+fate)\b",
    base_confidence: 0.55,
    match_bonus: 0.1,
    interpretation: "Outcome framed as unavoidable, releasing the subject from choice.",
};

// ── Distress ───────────────────────────────────────────────────────────────

pub const SOMATIC_LEAKAGE: DetectorSpec = DetectorSpec {
    kind: PatternKind::SomaticLeakage,
    pattern: r"(?i)\b(?:shaking|trembling|shivering|can['’]?t\s+breathe|out\s+of\s+breath|heart\s+(?:is\s+)?(?:racing|pounding)|chest\s+(?:is\s+)?tight|sweating|nause(?:a|ous)|sick\s+to\s+my\s+stomach|stomach\s+(?:is\s+)?in\s+knots|lump\s+in\s+my\s+throat|dizzy)\b",
    base_confidence: 0.75,
    match_bonus: 0.1,
    interpretation: "The body is reacting to the topic; distress is leaking past the words.",
};

pub const SHAME_CUE: DetectorSpec = DetectorSpec {
    kind: PatternKind::ShameCue,
    pattern: r"(?i)\b(?:ashamed|shameful|embarrass(?:ed|ing)|humiliat(?:ed|ing)|disgusted\s+with\s+myself|my\s+fault|i['’]?m\s+(?:so\s+)?(?:stupid|pathetic|worthless|a\s+failure)|hate\s+myself)\b",
    base_confidence: 0.6,
    match_bonus: 0.1,
    interpretation: "Subject is turning the story against themselves.",
};

pub const FREEZE_CUE: DetectorSpec = DetectorSpec {
    kind: PatternKind::FreezeCue,
    pattern: r"(?i)\b(?:i\s+(?:don['’]?t|do\s+not|can['’]?t)\s+(?:remember|recall)|mind\s+(?:went|goes|is)\s+(?:blank|empty)|i\s+froze|blanked|i\s+don['’]?t\s+know|no\s+idea)\b",
    base_confidence: 0.5,
    match_bonus: 0.1,
    interpretation: "Recall has stalled; the subject may be freezing rather than withholding.",
};

/// Brevity spikes are counted, not matched.
pub const BREVITY_BASE_CONFIDENCE: f64 = 0.45;
pub const BREVITY_MATCH_BONUS: f64 = 0.1;
pub const BREVITY_INTERPRETATION: &str =
    "Answer collapsed to a few words; engagement dropped on this topic.";

/// Regex detectors in registry order. The brevity detector is appended last.
pub const REGEX_DETECTORS: [&DetectorSpec; 10] = [
    &MINIMIZATION,
    &ABSOLUTIST,
    &PASSIVE_VOICE_SHIFT,
    &ACTOR_OMISSION,
    &HUMOR_DEFLECTION,
    &FUTURE_TENSE_EVASION,
    &SOMATIC_LEAKAGE,
    &INEVITABILITY,
    &SHAME_CUE,
    &FREEZE_CUE,
];
