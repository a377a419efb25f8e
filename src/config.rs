use std::time::Duration;

use thiserror::Error;

use crate::api::gateway::GatewayClient;
use crate::suites;

pub const BASE_URL_VAR: &str = "GATEWAY_BASE_URL";
pub const TIMEOUT_VAR: &str = "GATEWAY_TIMEOUT_SECS";
pub const SUITES_VAR: &str = "GATEWAY_SUITES";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{0} must be a positive integer number of seconds, got {1:?}")]
    InvalidTimeout(&'static str, String),
    #[error("{0} must start with http:// or https://, got {1:?}")]
    InvalidUrl(&'static str, String),
    #[error("Unknown suite {0:?} (expected one of: {1})")]
    UnknownSuite(String, String),
}

/// Runtime settings for a check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Suite keys to run, in run order
    pub suites: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: GatewayClient::DEFAULT_BASE_URL.to_string(),
            timeout: GatewayClient::DEFAULT_TIMEOUT,
            suites: suites::SUITE_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl GatewayConfig {
    /// Load from the process environment (call `dotenv` first to pick up `.env`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = non_empty(BASE_URL_VAR, lookup(BASE_URL_VAR))? {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(BASE_URL_VAR, url));
            }
            config.base_url = url;
        }

        if let Some(raw) = non_empty(TIMEOUT_VAR, lookup(TIMEOUT_VAR))? {
            config.timeout = parse_timeout(&raw)?;
        }

        if let Some(raw) = non_empty(SUITES_VAR, lookup(SUITES_VAR))? {
            let selected = parse_suites(raw.split(','))?;
            if selected.is_empty() {
                return Err(ConfigError::Empty(SUITES_VAR));
            }
            config.suites = selected;
        }

        Ok(config)
    }

    /// Replace the suite selection, e.g. from command-line arguments.
    /// An empty selection leaves the current one in place.
    pub fn with_suites<I, S>(mut self, keys: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = parse_suites(keys)?;
        if !selected.is_empty() {
            self.suites = selected;
        }
        Ok(self)
    }
}

fn non_empty(name: &'static str, value: Option<String>) -> Result<Option<String>, ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ConfigError::Empty(name)),
        Some(v) => Ok(Some(v.trim().to_string())),
        None => Ok(None),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(TIMEOUT_VAR, raw.to_string())),
    }
}

fn parse_suites<I, S>(keys: I) -> Result<Vec<String>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selected = Vec::new();
    for key in keys {
        let key = key.as_ref().trim().to_ascii_lowercase();
        if key.is_empty() {
            continue;
        }
        if !suites::SUITE_KEYS.contains(&key.as_str()) {
            return Err(ConfigError::UnknownSuite(key, suites::SUITE_KEYS.join(", ")));
        }
        if !selected.contains(&key) {
            selected.push(key);
        }
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8881/Prod_200_AppManagerWildFly21");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.suites, vec!["agnt", "cash", "xcash", "bill", "billf"]);
    }

    #[test]
    fn test_overrides() {
        let config = GatewayConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "https://gw.test/app"),
            (TIMEOUT_VAR, " 5 "),
            (SUITES_VAR, "XCASH, bill,xcash"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://gw.test/app");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.suites, vec!["xcash", "bill"]);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            GatewayConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])),
            Err(ConfigError::InvalidTimeout(TIMEOUT_VAR, "0".to_string()))
        );
        assert_eq!(
            GatewayConfig::from_lookup(lookup(&[(BASE_URL_VAR, "  ")])),
            Err(ConfigError::Empty(BASE_URL_VAR))
        );
        assert!(matches!(
            GatewayConfig::from_lookup(lookup(&[(BASE_URL_VAR, "127.0.0.1:8881")])),
            Err(ConfigError::InvalidUrl(..))
        ));
        assert!(matches!(
            GatewayConfig::from_lookup(lookup(&[(SUITES_VAR, "agnt,topup")])),
            Err(ConfigError::UnknownSuite(key, _)) if key == "topup"
        ));
    }

    #[test]
    fn test_separator_only_suites_are_empty() {
        for raw in [",", " , ", ",,"] {
            assert_eq!(
                GatewayConfig::from_lookup(lookup(&[(SUITES_VAR, raw)])),
                Err(ConfigError::Empty(SUITES_VAR)),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_cli_selection_overrides_env() {
        let config = GatewayConfig::from_lookup(lookup(&[(SUITES_VAR, "agnt")]))
            .unwrap()
            .with_suites(["CASH"])
            .unwrap();
        assert_eq!(config.suites, vec!["cash"]);

        let unchanged = GatewayConfig::default().with_suites(Vec::<String>::new()).unwrap();
        assert_eq!(unchanged.suites.len(), 5);
    }
}
