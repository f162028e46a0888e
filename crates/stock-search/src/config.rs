//! Configuration for ticker search operations

use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default provider endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Daily series function requested from the provider
pub const DEFAULT_SERIES_FUNCTION: &str = "TIME_SERIES_DAILY_ADJUSTED";

/// Environment variables checked, in order, for the provider credential
pub const API_KEY_ENV_VARS: [&str; 2] = ["STOCK_API_KEY", "ALPHA_VANTAGE_API_KEY"];

/// Environment variable pointing at a symbol → company name JSON file
pub const SYMBOLS_FILE_ENV_VAR: &str = "STOCK_SYMBOLS_FILE";

/// Configuration for ticker searches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Provider credential attached to every request.
    ///
    /// A missing key is not an error: requests go out with an empty
    /// `apikey` and the provider rejects them.
    pub api_key: Option<String>,

    /// Provider query endpoint
    pub base_url: String,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// Function name used for the daily price series request
    pub series_function: String,

    /// Optional JSON file with the symbol → company name table
    pub company_directory: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            series_function: DEFAULT_SERIES_FUNCTION.to_string(),
            company_directory: None,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration builder
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Load the credential and symbol table location from the environment
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env().build()
    }

    /// Credential to send, empty when none is configured
    pub fn credential(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(StockError::Config("base_url must not be empty".to_string()));
        }

        if self.request_timeout.is_zero() {
            return Err(StockError::Config(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        if self.series_function.trim().is_empty() {
            return Err(StockError::Config(
                "series_function must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for SearchConfig
#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    request_timeout: Option<Duration>,
    series_function: Option<String>,
    company_directory: Option<PathBuf>,
}

impl SearchConfigBuilder {
    /// Set the provider credential
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the provider endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the daily series function name
    pub fn series_function(mut self, function: impl Into<String>) -> Self {
        self.series_function = Some(function.into());
        self
    }

    /// Set the symbol table file
    pub fn company_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.company_directory = Some(path.into());
        self
    }

    /// Fill the credential and symbol table path from the environment,
    /// keeping anything already set explicitly.
    pub fn with_env(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = stock_utils::env_first(&API_KEY_ENV_VARS);
        }
        if self.company_directory.is_none() {
            self.company_directory = stock_utils::env_non_empty(SYMBOLS_FILE_ENV_VAR).map(PathBuf::from);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SearchConfig> {
        let defaults = SearchConfig::default();

        let config = SearchConfig {
            api_key: self.api_key,
            base_url: self.base_url.unwrap_or(defaults.base_url),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            series_function: self.series_function.unwrap_or(defaults.series_function),
            company_directory: self.company_directory,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.series_function, "TIME_SERIES_DAILY_ADJUSTED");
        assert_eq!(config.credential(), "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SearchConfig::builder()
            .api_key("demo")
            .base_url("http://127.0.0.1:9000/query")
            .request_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.credential(), "demo");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/query");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_key_is_not_rejected() {
        let config = SearchConfig::builder().build().unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let result = SearchConfig::builder().base_url("  ").build();
        assert!(matches!(result, Err(StockError::Config(_))));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = SearchConfig {
            request_timeout: Duration::ZERO,
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_key_survives_with_env() {
        let config = SearchConfig::builder()
            .api_key("explicit")
            .with_env()
            .build()
            .unwrap();

        assert_eq!(config.credential(), "explicit");
    }
}
