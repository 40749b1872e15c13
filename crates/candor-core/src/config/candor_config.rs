//! Top-level Candor configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    EchoConfig, GovernorConfig, InevitabilityConfig, LedgerConfig, PatternConfig, TapesConfig,
};
use crate::constants::MAX_LOOP_PRIORITY;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CANDOR_*`)
/// 2. Config file passed to [`CandorConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandorConfig {
    pub patterns: PatternConfig,
    pub echo: EchoConfig,
    pub inevitability: InevitabilityConfig,
    pub tapes: TapesConfig,
    pub governor: GovernorConfig,
    pub ledger: LedgerConfig,
}

impl CandorConfig {
    /// Load a TOML file, apply `CANDOR_*` environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        let mut config: CandorConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (no environment overrides).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CandorConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("patterns.confidence_cap", self.patterns.confidence_cap)?;
        check_unit("ledger.confidence_cap", self.ledger.confidence_cap)?;
        check_unit("ledger.escalation_step", self.ledger.escalation_step)?;
        check_unit("governor.min_reveal_score", self.governor.min_reveal_score)?;

        let inv = &self.inevitability;
        for (field, value) in [
            ("inevitability.recurring_pattern_weight", inv.recurring_pattern_weight),
            ("inevitability.recurring_pattern_cap", inv.recurring_pattern_cap),
            ("inevitability.contradiction_weight", inv.contradiction_weight),
            ("inevitability.contradiction_cap", inv.contradiction_cap),
            ("inevitability.critical_loop_bonus", inv.critical_loop_bonus),
            ("inevitability.contradicted_claim_bonus", inv.contradicted_claim_bonus),
            ("inevitability.soft_confront_threshold", inv.soft_confront_threshold),
            ("inevitability.reveal_threshold", inv.reveal_threshold),
            ("inevitability.firm_confront_threshold", inv.firm_confront_threshold),
        ] {
            check_unit(field, value)?;
        }
        if !(inv.soft_confront_threshold <= inv.reveal_threshold
            && inv.reveal_threshold <= inv.firm_confront_threshold)
        {
            return Err(ConfigError::ValidationFailed {
                field: "inevitability".to_string(),
                message: "thresholds must satisfy soft <= reveal <= firm".to_string(),
            });
        }
        if inv.critical_loop_priority > MAX_LOOP_PRIORITY {
            return Err(ConfigError::ValidationFailed {
                field: "inevitability.critical_loop_priority".to_string(),
                message: format!("must be between 0 and {MAX_LOOP_PRIORITY}"),
            });
        }
        if self.governor.pressure_ceiling > 10 {
            return Err(ConfigError::ValidationFailed {
                field: "governor.pressure_ceiling".to_string(),
                message: "must be between 0 and 10".to_string(),
            });
        }
        if self.tapes.min_gap_days <= 0 {
            return Err(ConfigError::ValidationFailed {
                field: "tapes.min_gap_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.patterns.brevity_max_words == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "patterns.brevity_max_words".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply `CANDOR_*` environment variable overrides. Unparseable values
    /// are skipped.
    fn apply_env_overrides(config: &mut CandorConfig) {
        if let Some(v) = env_parse::<f64>("CANDOR_PATTERNS_CONFIDENCE_CAP") {
            config.patterns.confidence_cap = v;
        }
        if let Some(v) = env_parse::<u32>("CANDOR_ECHO_ACT_DELAY") {
            config.echo.act_delay = v;
        }
        if let Some(v) = env_parse::<u32>("CANDOR_ECHO_TURN_DELAY") {
            config.echo.turn_delay = v;
        }
        if let Some(v) = env_parse::<i64>("CANDOR_TAPES_MIN_GAP_DAYS") {
            config.tapes.min_gap_days = v;
        }
        if let Some(v) = env_parse::<u8>("CANDOR_GOVERNOR_PRESSURE_CEILING") {
            config.governor.pressure_ceiling = v;
        }
        if let Some(v) = env_parse::<f64>("CANDOR_GOVERNOR_MIN_REVEAL_SCORE") {
            config.governor.min_reveal_score = v;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable config override");
            None
        }
    }
}

fn check_unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        })
    }
}
