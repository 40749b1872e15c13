/// Timeline gap analysis errors.
#[derive(Debug, thiserror::Error)]
pub enum TapesError {
    #[error("timeline entry {index} has an unparseable date: '{value}'")]
    InvalidDate { index: usize, value: String },
}
