use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;

/// Environment variable overriding [`LoaderConfig::delay_ms`].
///
/// `0` is accepted and means "on the next timer tick": insertion still goes
/// through the [`Timer`](crate::env::Timer), so it is never synchronous.
pub const DELAY_ENV_VAR: &str = "SCRIPT_RECIPE_DELAY_MS";

/// Delay before a script is inserted, unless configured otherwise.
pub const DEFAULT_DELAY_MS: u64 = 5000;

/// Settings for [`ScriptLoader`](super::ScriptLoader).
///
/// # Environment Variables
///
/// - `SCRIPT_RECIPE_DELAY_MS=250` - Insert scripts after 250 ms instead of 5000 ms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Milliseconds between `load_script` and insertion into the document.
    pub delay_ms: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl LoaderConfig {
    /// Sub-millisecond parts are dropped; delays beyond `u64::MAX` ms saturate.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(DELAY_ENV_VAR) {
            let parsed = value.trim().parse::<u64>();
            config.delay_ms = parsed.map_err(|source| ConfigError::InvalidDelay {
                key: DELAY_ENV_VAR,
                value,
                source,
            })?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        let config = LoaderConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, LoaderConfig::default());
        assert_eq!(config.delay(), Duration::from_millis(5000));
    }

    #[test]
    fn test_delay_override() {
        let config = LoaderConfig::from_lookup(|key| {
            (key == DELAY_ENV_VAR).then(|| " 250 ".to_string())
        })
        .unwrap();
        assert_eq!(config.delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_delay_is_accepted() {
        let config = LoaderConfig::from_lookup(|_| Some("0".to_string())).unwrap();
        assert_eq!(config.delay(), Duration::ZERO);
    }

    #[test]
    fn test_huge_delay_saturates() {
        let config = LoaderConfig::with_delay(Duration::MAX);
        assert_eq!(config.delay_ms, u64::MAX);
    }

    #[test]
    fn test_invalid_delay_is_rejected() {
        let err = LoaderConfig::from_lookup(|_| Some("soon".to_string())).unwrap_err();
        assert!(err.to_string().starts_with("Invalid SCRIPT_RECIPE_DELAY_MS value \"soon\""));
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let config: LoaderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.delay_ms, DEFAULT_DELAY_MS);

        let config: LoaderConfig = serde_json::from_str(r#"{"delay_ms": 10}"#).unwrap();
        assert_eq!(config, LoaderConfig::with_delay(Duration::from_millis(10)));
    }
}
