use candor_core::errors::RuleError;
use candor_core::models::EchoCategory;
use candor_core::rules;
use regex::Regex;

/// One categorized phrase rule.
#[derive(Debug, Clone)]
pub struct EchoRule {
    pub name: &'static str,
    pub category: EchoCategory,
    regex: Regex,
}

impl EchoRule {
    pub fn new(
        name: &'static str,
        category: EchoCategory,
        pattern: &str,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            name,
            category,
            regex: rules::compile(name, pattern)?,
        })
    }

    /// Matched phrases, trimmed, in text order.
    pub fn phrases<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .collect()
    }
}

const STANDARD_RULES: &[(EchoCategory, &str, &str)] = &[
    (
        EchoCategory::Minimizer,
        "echo_minimizer",
        r"(?i)\b(?:it\s+was\s+nothing|(?:it['’]?s|it\s+was)\s+not\s+(?:a|that)\s+big\s+(?:deal|thing)|no\s+big\s+deal|not\s+that\s+bad|just\s+a\s+(?:little|phase))\b",
    ),
    (
        EchoCategory::Inevitability,
        "echo_inevitability",
        r"(?i)\b(?:i\s+had\s+no\s+choice|it\s+was\s+(?:always\s+)?(?:going|bound|meant)\s+to\s+(?:happen|be)|nothing\s+i\s+could\s+(?:have\s+)?do(?:ne)?)\b",
    ),
    (
        EchoCategory::Shame,
        "echo_shame",
        r"(?i)\b(?:i['’]?m\s+(?:so\s+)?ashamed|it\s+was\s+(?:all\s+)?my\s+fault|i\s+hate\s+myself|i\s+was\s+(?:so\s+)?(?:stupid|humiliated))\b",
    ),
    (
        EchoCategory::AgencyDenial,
        "echo_agency_denial",
        r"(?i)\b(?:it\s+(?:just\s+)?happened|i\s+didn['’]?t\s+(?:do|mean)\s+(?:anything|it)|(?:they|he|she)\s+made\s+me|i\s+wasn['’]?t\s+(?:really\s+)?(?:there|involved)|i\s+had\s+nothing\s+to\s+do\s+with\s+it)\b",
    ),
];

/// Immutable echo rule table.
#[derive(Debug, Clone)]
pub struct EchoRuleSet {
    rules: Vec<EchoRule>,
}

impl EchoRuleSet {
    pub fn standard() -> Self {
        let rules = rules::compile_builtin(STANDARD_RULES)
            .into_iter()
            .map(|(category, name, regex)| EchoRule {
                name,
                category,
                regex,
            })
            .collect();
        Self { rules }
    }

    pub fn from_rules(rules: Vec<EchoRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[EchoRule] {
        &self.rules
    }
}

impl Default for EchoRuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
