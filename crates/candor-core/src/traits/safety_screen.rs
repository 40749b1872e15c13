use crate::models::{SafetySignal, SafetySignalType};

/// Highest-priority crisis screen over raw turn text.
pub trait ISafetyScreen: Send + Sync {
    /// Return the first matching crisis signal, or `None`.
    fn detect(&self, text: &str, turn_index: u32) -> Option<SafetySignal>;

    /// The fixed message the host must deliver, and only deliver, for a signal.
    fn response(&self, signal_type: SafetySignalType) -> &str;
}
