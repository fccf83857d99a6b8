use serde::{Deserialize, Deserializer};
use std::time::Duration;

pub const DEFAULT_URI: &str = "http://127.0.0.1:5000/graphql";
pub const ENV_PREFIX: &str = "PRODUCT_FEED";

/// Settings for the client and its HTTP link.
///
/// Environment keys carry the `PRODUCT_FEED_` prefix:
/// `PRODUCT_FEED_GRAPHQL_URI`, `PRODUCT_FEED_BUFFER_SIZE`,
/// `PRODUCT_FEED_TIMEOUT_SECS`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(rename = "graphql_uri")]
    pub uri: String,
    pub buffer_size: usize,
    #[serde(rename = "timeout_secs", deserialize_with = "duration_from_secs")]
    pub timeout: Duration,
}

fn duration_from_secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_secs)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            buffer_size: 32,
            timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Loads from `vars` in place of the process environment when given.
    pub fn load(vars: Option<config::Map<String, String>>) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("graphql_uri", defaults.uri)?
            .set_default("buffer_size", defaults.buffer_size as i64)?
            .set_default("timeout_secs", defaults.timeout.as_secs() as i64)?
            // Eg. `PRODUCT_FEED_TIMEOUT_SECS=3` sets the `timeout_secs` key
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .ignore_empty(true)
                    .source(vars),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults_to_loopback_endpoint() {
        let config = ClientConfig::load(vars(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.uri, "http://127.0.0.1:5000/graphql");
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::load(vars(&[
            ("PRODUCT_FEED_GRAPHQL_URI", "http://catalog.internal/graphql"),
            ("PRODUCT_FEED_TIMEOUT_SECS", "3"),
            ("PRODUCT_FEED_BUFFER_SIZE", "4"),
        ]))
        .unwrap();
        assert_eq!(config.uri, "http://catalog.internal/graphql");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.buffer_size, 4);
    }

    #[test]
    fn test_empty_value_keeps_default() {
        let config = ClientConfig::load(vars(&[("PRODUCT_FEED_GRAPHQL_URI", "")])).unwrap();
        assert_eq!(config.uri, DEFAULT_URI);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let result = ClientConfig::load(vars(&[("PRODUCT_FEED_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unprefixed_keys_are_ignored() {
        let config = ClientConfig::load(vars(&[("GRAPHQL_URI", "http://elsewhere/graphql")])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
