//! Alpha Vantage API client

use crate::api::models::{
    DailySeriesResponse, GlobalQuoteResponse, NewsFeedResponse, provider_error,
};
use crate::api::{ProviderClient, QueryKind};
use crate::config::SearchConfig;
use crate::error::{Result, StockError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

const QUOTE_FUNCTION: &str = "GLOBAL_QUOTE";
const NEWS_FUNCTION: &str = "NEWS_SENTIMENT";

/// Alpha Vantage API client
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    base_url: Url,
    api_key: String,
    series_function: String,
}

impl AlphaVantageClient {
    /// Create a client from search configuration
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("stock-search/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.base_url)?,
            api_key: config.credential().to_string(),
            series_function: config.series_function.clone(),
        })
    }

    /// Create from environment variables with default settings
    pub fn from_env() -> Result<Self> {
        Self::new(&SearchConfig::from_env()?)
    }

    fn function(&self, kind: QueryKind) -> &str {
        match kind {
            QueryKind::Quote => QUOTE_FUNCTION,
            QueryKind::Series => &self.series_function,
            QueryKind::News => NEWS_FUNCTION,
        }
    }

    /// Build the request URL for one query kind
    pub fn query_url(&self, kind: QueryKind, symbol: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("function", self.function(kind))
            .append_pair(kind.symbol_param(), symbol)
            .append_pair("apikey", &self.api_key);
        url
    }

    /// Issue a single GET and decode the body into `T`
    async fn get_json<T: DeserializeOwned>(&self, kind: QueryKind, symbol: &str) -> Result<T> {
        let url = self.query_url(kind, symbol);
        tracing::debug!(kind = kind.as_str(), url = %redact_credential(&url), "Provider request");

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(StockError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;

        // 200 responses can still carry a request-level error
        if let Some(message) = provider_error(&body) {
            return Err(StockError::Provider(message));
        }

        Ok(serde_json::from_value(body)?)
    }
}

#[async_trait]
impl ProviderClient for AlphaVantageClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<GlobalQuoteResponse> {
        self.get_json(QueryKind::Quote, symbol).await
    }

    async fn fetch_series(&self, symbol: &str) -> Result<DailySeriesResponse> {
        self.get_json(QueryKind::Series, symbol).await
    }

    async fn fetch_news(&self, symbol: &str) -> Result<NewsFeedResponse> {
        self.get_json(QueryKind::News, symbol).await
    }
}

/// Copy of `url` with the credential masked, for logging
fn redact_credential(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "apikey" { "***".into() } else { value };
            (name.into_owned(), value.into_owned())
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}
