//! Demo configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use tracing_subscriber::EnvFilter;

/// Demo configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Tracing filter directive, e.g. `info` or `promo_core=trace`
    pub log_filter: String,

    /// Print which promotion won for best-promotion scenarios
    pub report_winner: bool,
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = DemoConfig {
            log_filter: lookup("PROMO_LOG").unwrap_or_else(|| "info".to_string()),

            report_winner: lookup("PROMO_REPORT_WINNER")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PROMO_REPORT_WINNER".to_string()))?,
        };

        // Reject filters the subscriber would choke on
        config.env_filter()?;

        Ok(config)
    }

    /// Builds the tracing filter from `log_filter`.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter)
            .map_err(|_| ConfigError::InvalidValue("PROMO_LOG".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
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
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.log_filter, "info");
        assert!(config.report_winner);
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::from_lookup(lookup(&[
            ("PROMO_LOG", "promo_core=trace"),
            ("PROMO_REPORT_WINNER", "false"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "promo_core=trace");
        assert!(!config.report_winner);
    }

    #[test]
    fn test_invalid_bool() {
        let err = DemoConfig::from_lookup(lookup(&[("PROMO_REPORT_WINNER", "sometimes")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PROMO_REPORT_WINNER");
    }

    #[test]
    fn test_invalid_filter() {
        let err = DemoConfig::from_lookup(lookup(&[("PROMO_LOG", "promo_core=loud")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PROMO_LOG");
    }
}
