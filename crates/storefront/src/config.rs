//! Page configuration.
//!
//! Read once at startup, from the environment or from a JSON document:
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `STOREFRONT_PREMIUM` | `premium` | `false` |
//! | `STOREFRONT_CHANNEL_BUFFER` | `channel_buffer` | `32` |

use serde::Deserialize;
use thiserror::Error;

pub const PREMIUM_VAR: &str = "STOREFRONT_PREMIUM";
pub const CHANNEL_BUFFER_VAR: &str = "STOREFRONT_CHANNEL_BUFFER";

const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("channel_buffer must be at least 1")]
    ZeroBuffer,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Premium shoppers get free shipping.
    pub premium: bool,
    /// Request queue depth of each actor.
    pub channel_buffer: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            premium: false,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    /// Unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(PREMIUM_VAR) {
            config.premium = parse_flag(&value).ok_or_else(|| ConfigError::InvalidVar {
                var: PREMIUM_VAR,
                reason: "expected true/false, 1/0 or yes/no".to_string(),
                value,
            })?;
        }

        if let Some(value) = lookup(CHANNEL_BUFFER_VAR) {
            config.channel_buffer =
                value
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| ConfigError::InvalidVar {
                        var: CHANNEL_BUFFER_VAR,
                        reason: e.to_string(),
                        value: value.clone(),
                    })?;
        }

        config.validate()
    }

    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::ZeroBuffer);
        }
        Ok(self)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert!(!config.premium);
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn reads_flags_in_any_accepted_spelling() {
        for (raw, expected) in [("true", true), ("YES", true), ("1", true), ("no", false), ("0", false)] {
            let config = StorefrontConfig::from_lookup(lookup(&[(PREMIUM_VAR, raw)])).unwrap();
            assert_eq!(config.premium, expected, "{raw}");
        }
    }

    #[test]
    fn rejects_garbage() {
        let err = StorefrontConfig::from_lookup(lookup(&[(PREMIUM_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { var: PREMIUM_VAR, .. }));

        let err =
            StorefrontConfig::from_lookup(lookup(&[(CHANNEL_BUFFER_VAR, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { var: CHANNEL_BUFFER_VAR, .. }));

        let err = StorefrontConfig::from_lookup(lookup(&[(CHANNEL_BUFFER_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBuffer));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = StorefrontConfig::from_json(r#"{ "premium": true }"#).unwrap();
        assert_eq!(
            config,
            StorefrontConfig {
                premium: true,
                channel_buffer: 32
            }
        );
    }

    #[test]
    fn json_rejects_unknown_fields() {
        let err = StorefrontConfig::from_json(r#"{ "premiun": true }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
