//! Crisis rule table, evaluated top to bottom with first match winning.

use candor_core::errors::RuleError;
use candor_core::models::SafetySignalType;
use candor_core::rules;
use regex::Regex;

/// One crisis pattern and the signal it raises.
#[derive(Debug, Clone)]
pub struct SafetyRule {
    pub name: String,
    pub signal_type: SafetySignalType,
    pub confidence: f64,
    regex: Regex,
}

impl SafetyRule {
    pub fn new(
        name: impl Into<String>,
        signal_type: SafetySignalType,
        pattern: &str,
        confidence: f64,
    ) -> Result<Self, RuleError> {
        let name = name.into();
        let regex = rules::compile(&name, pattern)?;
        Ok(Self {
            name,
            signal_type,
            confidence: confidence.clamp(0.0, 1.0),
            regex,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

// Ordered by priority: self-harm > harm to others > child exploitation > acute crisis.
const STANDARD_RULES: &[((SafetySignalType, f64), &str, &str)] = &[
    (
        (SafetySignalType::ImminentSelfHarm, 0.95),
        "self_harm_explicit",
        r"(?i)\b(?:kill|hurt|cut|harm)\s+myself\b|\bend\s+(?:my\s+life|it\s+all)\b|\btake\s+my\s+(?:own\s+)?life\b|\bsuicid(?:e|al)\b",
    ),
    (
        (SafetySignalType::ImminentSelfHarm, 0.85),
        "self_harm_ideation",
        r"(?i)\b(?:want|wanted|going)\s+to\s+die\b|\bdon['’]?t\s+want\s+to\s+(?:be\s+alive|live|be\s+here)\s+anymore\b|\bbetter\s+off\s+dead\b",
    ),
    (
        (SafetySignalType::ImminentHarmToOthers, 0.9),
        "harm_to_others_intent",
        r"(?i)\b(?:going\s+to|gonna|want\s+to|will|i['’]ll)\s+(?:kill|hurt|shoot|stab|strangle)\s+(?:him|her|them|someone|somebody|everyone|my\s+\w+)\b",
    ),
    (
        (SafetySignalType::ChildExploitationDisclosure, 0.9),
        "child_abuse_disclosure",
        r"(?i)\bmolest(?:ed|ing)?\b|\bsexually\s+abused\b|\b(?:touched|abused)\s+me\s+when\s+i\s+was\s+(?:a\s+(?:kid|child)|little|young|\d{1,2})\b",
    ),
    (
        (SafetySignalType::ChildExploitationDisclosure, 0.9),
        "child_exploitation_terms",
        r"(?i)\bchild\s+(?:abuse|porn\w*|exploitation)\b|\bcsam\b|\b(?:touched|abused)\s+(?:a|the|my|his|her)\s+(?:child|kid|little\s+(?:girl|boy))\b",
    ),
    (
        (SafetySignalType::AcuteCrisis, 0.8),
        "acute_panic",
        r"(?i)\bhaving\s+a\s+panic\s+attack\b|\bpanic\s+attack\b.{0,20}\bright\s+now\b",
    ),
    (
        (SafetySignalType::AcuteCrisis, 0.8),
        "acute_overwhelm",
        r"(?i)\bi['’]?m\s+(?:in\s+crisis|falling\s+apart|losing\s+my\s+mind|not\s+safe)\b|\bi\s+can['’]?t\s+(?:go\s+on|do\s+this\s+anymore|stop\s+crying)\b|\bneed\s+help\s+right\s+now\b",
    ),
];

/// Immutable, priority-ordered crisis rules.
#[derive(Debug, Clone)]
pub struct SafetyRuleSet {
    rules: Vec<SafetyRule>,
}

impl SafetyRuleSet {
    /// The built-in rule table.
    pub fn standard() -> Self {
        let rules = rules::compile_builtin(STANDARD_RULES)
            .into_iter()
            .map(|((signal_type, confidence), name, regex)| SafetyRule {
                name: name.to_string(),
                signal_type,
                confidence,
                regex,
            })
            .collect();
        Self { rules }
    }

    /// A custom table. Slice order is precedence order.
    pub fn from_rules(rules: Vec<SafetyRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[SafetyRule] {
        &self.rules
    }

    /// The highest-priority rule matching `text`.
    pub fn first_match(&self, text: &str) -> Option<&SafetyRule> {
        self.rules.iter().find(|r| r.is_match(text))
    }
}

impl Default for SafetyRuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
