use std::collections::HashMap;

use candor_core::models::ReceiptKind;

/// Canned permission question used whenever a plan requires consent.
pub const DEFAULT_ASK_COPY: &str =
    "There's something I'd like to show you. Is it okay if we look at it together?";

/// Tease line and integration prompt for one kind of receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealCopy {
    pub tease: String,
    pub integration_prompt: String,
}

impl RevealCopy {
    pub fn new(tease: impl Into<String>, integration_prompt: impl Into<String>) -> Self {
        Self {
            tease: tease.into(),
            integration_prompt: integration_prompt.into(),
        }
    }
}

const STANDARD_COPY: &[(ReceiptKind, &str, &str)] = &[
    (
        ReceiptKind::Quote,
        "Something you said earlier has stayed with me.",
        "Hearing those words again, what comes up for you?",
    ),
    (
        ReceiptKind::Photo,
        "I have a photo from around that time.",
        "Looking at this now, what do you remember about that day?",
    ),
    (
        ReceiptKind::TimelineSnap,
        "There's a date on your timeline I keep coming back to.",
        "Where were you in your life when this happened?",
    ),
    (
        ReceiptKind::MissingTape,
        "There's a stretch of time we haven't talked about yet.",
        "What was happening for you during those months?",
    ),
];

const FALLBACK_TEASE: &str = "There's something I want to bring into the conversation.";
const FALLBACK_PROMPT: &str = "How does it feel to see this?";

/// Fixed copy lookup keyed on receipt kind, with a fallback for kinds the
/// table does not cover.
#[derive(Debug, Clone)]
pub struct RevealCopyTable {
    entries: HashMap<ReceiptKind, RevealCopy>,
    fallback: RevealCopy,
}

impl RevealCopyTable {
    /// The built-in table covering every receipt kind.
    pub fn standard() -> Self {
        let entries = STANDARD_COPY
            .iter()
            .map(|&(kind, tease, prompt)| (kind, RevealCopy::new(tease, prompt)))
            .collect();
        Self {
            entries,
            fallback: RevealCopy::new(FALLBACK_TEASE, FALLBACK_PROMPT),
        }
    }

    /// An empty table that answers every lookup with `fallback`.
    pub fn with_fallback(fallback: RevealCopy) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    pub fn with_entry(mut self, kind: ReceiptKind, copy: RevealCopy) -> Self {
        self.entries.insert(kind, copy);
        self
    }

    pub fn lookup(&self, kind: ReceiptKind) -> &RevealCopy {
        self.entries.get(&kind).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &RevealCopy {
        &self.fallback
    }
}

impl Default for RevealCopyTable {
    fn default() -> Self {
        Self::standard()
    }
}
