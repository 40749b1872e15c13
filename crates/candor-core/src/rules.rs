//! Helpers shared by the engines' immutable rule tables.

use regex::Regex;

use crate::errors::RuleError;

/// Compile one rule pattern, naming the rule in the error.
pub fn compile(rule: &str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|e| RuleError::InvalidPattern {
        rule: rule.to_string(),
        message: e.to_string(),
    })
}

/// Compile a built-in table, dropping (and logging) any entry that fails.
///
/// Built-in patterns are fixed literals, so a failure here is a programming
/// error; the engine keeps running on the remaining rules.
pub fn compile_builtin<K: Copy>(
    table: &[(K, &'static str, &'static str)],
) -> Vec<(K, &'static str, Regex)> {
    table
        .iter()
        .filter_map(|&(key, name, pattern)| match compile(name, pattern) {
            Ok(re) => Some((key, name, re)),
            Err(e) => {
                tracing::error!(rule = name, error = %e, "built-in rule failed to compile");
                None
            }
        })
        .collect()
}

/// Count word tokens the way every brevity and length heuristic does.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count()
}
