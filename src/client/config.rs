//! Client configuration.
//!
//! Provides configuration options for the HTTP client.

use std::time::Duration;

use super::error::ClientError;

/// Default base URL for the API.
pub const DEFAULT_BASE_URL: &str = "https://www.pushlapgrowth.com/api/v1/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API token sent as a bearer credential on every request.
    pub api_token: String,

    /// Base URL for the API.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a new configuration with the given API token.
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("pushlapgrowth-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.api_token.is_empty() {
            return Err(ClientError::InvalidConfig(
                "api_token cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = ClientConfig::new("test-token");
        assert_eq!(config.api_token, "test-token");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("test-token")
            .with_base_url("https://staging.example.com/api/v1/")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("my-app/1.0");

        assert_eq!(config.base_url, "https://staging.example.com/api/v1/");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "my-app/1.0");
    }

    #[test]
    fn test_config_validate_valid() {
        let config = ClientConfig::new("test-token");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_empty_token() {
        let config = ClientConfig::new("");
        assert!(matches!(
            config.validate(),
            Err(ClientError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_validate_invalid_scheme() {
        let config = ClientConfig::new("test-token").with_base_url("ftp://api.example.com");
        assert!(matches!(
            config.validate(),
            Err(ClientError::InvalidConfig(_))
        ));
    }
}
