/// Errors raised while building a custom rule table.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("rule '{rule}' has an invalid pattern: {message}")]
    InvalidPattern { rule: String, message: String },
}
