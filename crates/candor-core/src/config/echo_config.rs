use serde::{Deserialize, Serialize};

use crate::constants;

/// Echo phrase replay windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EchoConfig {
    /// Acts after capture before an echo may be replayed.
    pub act_delay: u32,
    /// Turns after capture before an echo may be replayed.
    pub turn_delay: u32,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            act_delay: constants::ECHO_ACT_DELAY,
            turn_delay: constants::ECHO_TURN_DELAY,
        }
    }
}
