//! Authorizer configuration.
//!
//! Settings are loaded from environment variables with defaults suitable
//! for local development. Nothing here changes the rule table; it only
//! affects how the [`Authorizer`](crate::Authorizer) logs and how long it
//! waits for the space store.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Environment variable enabling the audit log of denials.
pub const AUDIT_DECISIONS_VAR: &str = "SPACEGATE_AUDIT_DECISIONS";

/// Environment variable holding the space lookup timeout in milliseconds.
pub const LOOKUP_TIMEOUT_VAR: &str = "SPACEGATE_LOOKUP_TIMEOUT_MS";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Configuration for the [`Authorizer`](crate::Authorizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Log every denial at info level.
    pub audit_decisions: bool,

    /// Upper bound for one space lookup, in milliseconds.
    pub lookup_timeout_ms: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            audit_decisions: false,
            lookup_timeout_ms: 2_000,
        }
    }
}

impl PolicyConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SPACEGATE_AUDIT_DECISIONS`: Log denials at info level (default: false)
    /// - `SPACEGATE_LOOKUP_TIMEOUT_MS`: Space lookup timeout (default: 2000)
    ///
    /// Unparsable values fall back to the defaults. Use
    /// [`from_env_strict`](Self::from_env_strict) to reject them instead.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from environment variables, rejecting bad values.
    pub fn from_env_strict() -> Result<Self, ConfigError> {
        Self::from_vars_strict(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        Self {
            audit_decisions: lookup(AUDIT_DECISIONS_VAR)
                .and_then(|s| parse_flag(&s))
                .unwrap_or(default.audit_decisions),
            lookup_timeout_ms: lookup(LOOKUP_TIMEOUT_VAR)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default.lookup_timeout_ms),
        }
    }

    /// Strict variant of [`from_vars`](Self::from_vars).
    pub fn from_vars_strict<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let audit_decisions = match lookup(AUDIT_DECISIONS_VAR) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: AUDIT_DECISIONS_VAR.to_string(),
                message: format!("expected a boolean, got {:?}", raw),
            })?,
            None => default.audit_decisions,
        };

        let lookup_timeout_ms = match lookup(LOOKUP_TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: LOOKUP_TIMEOUT_VAR.to_string(),
                message: format!("{}", e),
            })?,
            None => default.lookup_timeout_ms,
        };

        let config = Self {
            audit_decisions,
            lookup_timeout_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookup_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: LOOKUP_TIMEOUT_VAR.to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Get the lookup timeout as a Duration.
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    /// Enable or disable the audit log.
    pub fn with_audit(mut self, audit_decisions: bool) -> Self {
        self.audit_decisions = audit_decisions;
        self
    }

    /// Set the lookup timeout.
    ///
    /// Sub-millisecond timeouts round up to 1 ms; timeouts beyond `u64`
    /// milliseconds saturate.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.lookup_timeout_ms = if millis == 0 && !timeout.is_zero() {
            1
        } else {
            millis
        };
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = PolicyConfig::default();
        assert!(!config.audit_decisions);
        assert_eq!(config.lookup_timeout(), Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_vars() {
        let config = PolicyConfig::from_vars(vars(&[
            (AUDIT_DECISIONS_VAR, "true"),
            (LOOKUP_TIMEOUT_VAR, "250"),
        ]));
        assert!(config.audit_decisions);
        assert_eq!(config.lookup_timeout_ms, 250);
    }

    #[test]
    fn test_from_vars_falls_back_on_garbage() {
        let config = PolicyConfig::from_vars(vars(&[
            (AUDIT_DECISIONS_VAR, "maybe"),
            (LOOKUP_TIMEOUT_VAR, "soon"),
        ]));
        assert_eq!(config, PolicyConfig::default());
    }

    #[test]
    fn test_from_vars_strict_rejects_garbage() {
        let err = PolicyConfig::from_vars_strict(vars(&[(AUDIT_DECISIONS_VAR, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains(AUDIT_DECISIONS_VAR));

        let err =
            PolicyConfig::from_vars_strict(vars(&[(LOOKUP_TIMEOUT_VAR, "-1")])).unwrap_err();
        assert!(err.to_string().contains(LOOKUP_TIMEOUT_VAR));
    }

    #[test]
    fn test_from_vars_strict_rejects_zero_timeout() {
        assert!(PolicyConfig::from_vars_strict(vars(&[(LOOKUP_TIMEOUT_VAR, "0")])).is_err());
    }

    #[test]
    fn test_from_vars_strict_accepts_flags() {
        let config = PolicyConfig::from_vars_strict(vars(&[(AUDIT_DECISIONS_VAR, "1")])).unwrap();
        assert!(config.audit_decisions);
        assert_eq!(config.lookup_timeout_ms, 2_000);
    }

    #[test]
    fn test_builders() {
        let config = PolicyConfig::default()
            .with_audit(true)
            .with_lookup_timeout(Duration::from_millis(40));
        assert!(config.audit_decisions);
        assert_eq!(config.lookup_timeout_ms, 40);
    }

    #[test]
    fn test_sub_millisecond_timeout_rounds_up() {
        let config = PolicyConfig::default().with_lookup_timeout(Duration::from_micros(300));
        assert_eq!(config.lookup_timeout_ms, 1);
        assert!(config.validate().is_ok());

        let config = PolicyConfig::default().with_lookup_timeout(Duration::ZERO);
        assert_eq!(config.lookup_timeout_ms, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_timeout_saturates() {
        let config = PolicyConfig::default().with_lookup_timeout(Duration::MAX);
        assert_eq!(config.lookup_timeout_ms, u64::MAX);
    }
}
