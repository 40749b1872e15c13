use crate::models::EchoPhrase;

/// Capture of quotable phrases and their delayed replay windows.
pub trait IEchoCapture: Send + Sync {
    fn capture(&self, text: &str, turn_index: u32, current_act: u32) -> Vec<EchoPhrase>;

    /// Unused echoes whose act gate or turn gate has opened.
    fn eligible<'a>(
        &self,
        echoes: &'a [EchoPhrase],
        current_act: u32,
        current_turn: u32,
    ) -> Vec<&'a EchoPhrase>;
}
