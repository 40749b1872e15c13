//! Configuration system for Candor.
//! TOML-based; every threshold and weight the engines use has a compiled
//! default and may be overridden per deployment.

pub mod candor_config;
pub mod echo_config;
pub mod governor_config;
pub mod inevitability_config;
pub mod ledger_config;
pub mod pattern_config;
pub mod tapes_config;

pub use candor_config::CandorConfig;
pub use echo_config::EchoConfig;
pub use governor_config::GovernorConfig;
pub use inevitability_config::InevitabilityConfig;
pub use ledger_config::LedgerConfig;
pub use pattern_config::PatternConfig;
pub use tapes_config::TapesConfig;
