//! # Client Configuration
//!
//! Configuration for the order service client. Plain struct with a
//! `Default` impl; consumers override what they need.

use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// Configuration for [`crate::OrderClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the order service. The client POSTs to
    /// `{base_url}/orders` - the path is appended verbatim, so a
    /// trailing slash in `base_url` produces a double slash.
    pub base_url: String,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Whole-request timeout (connect + send + receive).
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Config pointing at `base_url` with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Checks the config before a client is built from it.
    pub(crate) fn validate(&self) -> ClientResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url must not be empty".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_new_overrides_url_only() {
        let config = ClientConfig::new("https://orders.internal");
        assert_eq!(config.base_url, "https://orders.internal");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::new("   ").validate().is_err());
        assert!(ClientConfig::new("ftp://svc").validate().is_err());
        assert!(ClientConfig::new("http://svc").validate().is_ok());
    }
}
