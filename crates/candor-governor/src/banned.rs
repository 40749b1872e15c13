//! Instruction-text content standards.

use candor_core::errors::RuleError;
use candor_core::models::BannedTermCategory;
use candor_core::rules;
use regex::Regex;

/// One banned-term rule.
#[derive(Debug, Clone)]
pub struct BannedTermRule {
    pub name: &'static str,
    pub category: BannedTermCategory,
    regex: Regex,
}

impl BannedTermRule {
    pub fn new(
        name: &'static str,
        category: BannedTermCategory,
        pattern: &str,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            name,
            category,
            regex: rules::compile(name, pattern)?,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

const STANDARD_RULES: &[(BannedTermCategory, &str, &str)] = &[
    (
        BannedTermCategory::DiagnosticLabel,
        "diagnostic_label",
        r"(?i)\b(?:narcissis(?:t|tic)|sociopath(?:ic)?|psychopath(?:ic)?|bipolar|borderline|schizophreni(?:a|c)|ptsd|ocd|adhd|personality\s+disorder|clinically\s+depressed|you\s+(?:have|suffer\s+from)\s+(?:depression|anxiety|trauma))\b",
    ),
    (
        BannedTermCategory::AiSelfDisclosure,
        "ai_self_disclosure",
        r"(?i)\b(?:as\s+an\s+ai|(?:i['’]?m|i\s+am)\s+(?:an?\s+|just\s+an?\s+)?(?:ai|artificial\s+intelligence|language\s+model|chatbot|bot)|language\s+model)\b",
    ),
    (
        BannedTermCategory::AbsoluteClinicalClaim,
        "absolute_clinical_claim",
        r"(?i)\b(?:you\s+(?:are|were)\s+(?:definitely|clearly|obviously)\s+(?:traumati[sz]ed|in\s+denial|repressing|dissociating)|this\s+(?:proves|means)\s+you\s+(?:have|are)|(?:clinically|medically)\s+proven|you\s+(?:will\s+)?never\s+(?:recover|heal)|guaranteed\s+to\s+(?:heal|cure))\b",
    ),
];

/// Immutable banned-term table, checked in order.
#[derive(Debug, Clone)]
pub struct BannedTermRuleSet {
    rules: Vec<BannedTermRule>,
}

impl BannedTermRuleSet {
    pub fn standard() -> Self {
        let rules = rules::compile_builtin(STANDARD_RULES)
            .into_iter()
            .map(|(category, name, regex)| BannedTermRule {
                name,
                category,
                regex,
            })
            .collect();
        Self { rules }
    }

    pub fn from_rules(rules: Vec<BannedTermRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[BannedTermRule] {
        &self.rules
    }

    /// First rule matching `text`, in table order.
    pub fn first_match(&self, text: &str) -> Option<&BannedTermRule> {
        self.rules.iter().find(|r| r.is_match(text))
    }
}

impl Default for BannedTermRuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
