/// Configuration schema for the powgate binary
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::VerifyError;
use crate::verification::allowlist::DEFAULT_FETCH_TIMEOUT;
use crate::verification::credential::SaltScheme;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Base64-encoded proof-of-work credential
    #[serde(default)]
    pub pow: String,

    /// Hex digest the credential must hash to
    #[serde(default)]
    pub private_key: String,

    /// How the username salt is bound to the credential: "embedded" or "appended"
    /// - embedded: the username is carried inside the token after '#'
    /// - appended: the username is appended to the token before hashing
    #[serde(default)]
    pub scheme: SaltScheme,

    /// Allow-list fetch timeout (seconds)
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pow: String::new(),
            private_key: String::new(),
            scheme: SaltScheme::default(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), VerifyError> {
        if self.pow.is_empty() {
            return Err(VerifyError::MissingConfig("POW"));
        }

        if self.private_key.is_empty() {
            return Err(VerifyError::MissingConfig("PRIVATE_KEY"));
        }

        Ok(())
    }

    /// Get the allow-list fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            pow: "YWNtZS9yb2NrZXQ=".to_string(),
            private_key: "ab".repeat(32),
            scheme: SaltScheme::Embedded,
            fetch_timeout_secs: 5,
        };

        assert!(config.validate().is_ok());

        config.pow = "".to_string();
        assert!(matches!(
            config.validate(),
            Err(VerifyError::MissingConfig("POW"))
        ));

        config.pow = "YWNtZS9yb2NrZXQ=".to_string();
        config.private_key = "".to_string();
        assert!(matches!(
            config.validate(),
            Err(VerifyError::MissingConfig("PRIVATE_KEY"))
        ));
    }

    #[test]
    fn test_default_values() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.pow, "");
        assert_eq!(config.private_key, "");
        assert_eq!(config.scheme, SaltScheme::Embedded);
        assert_eq!(config.fetch_timeout_secs, 5);
    }

    #[test]
    fn test_full_config_parses() {
        let json = r#"{
            "pow": "YWNtZS9yb2NrZXQ=",
            "private_key": "39473dc1337049a5719747ba00132a30",
            "scheme": "appended",
            "fetch_timeout_secs": 10
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.pow, "YWNtZS9yb2NrZXQ=");
        assert_eq!(config.scheme, SaltScheme::Appended);
        assert_eq!(config.fetch_timeout_secs, 10);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_unknown_scheme_tag_is_rejected() {
        let json = r#"{"scheme": "sideways"}"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }
}
