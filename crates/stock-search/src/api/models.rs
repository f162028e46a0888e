//! Typed provider payloads
//!
//! Every provider key name the pipeline depends on is declared in this
//! module. A body that does not match these shapes fails to decode here
//! and becomes a transport failure for its pipeline.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Key of the quote sub-mapping in a `GLOBAL_QUOTE` body
pub const GLOBAL_QUOTE_KEY: &str = "Global Quote";
/// Quote field holding the ticker
pub const QUOTE_SYMBOL_FIELD: &str = "01. symbol";
/// Quote field holding the last price
pub const QUOTE_PRICE_FIELD: &str = "05. price";
/// Quote field holding the latest trading day
pub const QUOTE_TRADING_DAY_FIELD: &str = "07. latest trading day";

/// Key of the date mapping in a daily series body
pub const DAILY_SERIES_KEY: &str = "Time Series (Daily)";
/// Per-day field holding the closing price
pub const CLOSE_FIELD: &str = "4. close";

/// Keys the provider uses to report request-level problems with a 200 status
pub const PROVIDER_ERROR_KEYS: [&str; 3] = ["Error Message", "Information", "Note"];

/// `GLOBAL_QUOTE` response body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GlobalQuoteResponse {
    /// Quote fields keyed by provider field name; empty when the symbol is
    /// unknown to the provider
    #[serde(rename = "Global Quote")]
    pub global_quote: Map<String, Value>,
}

/// Daily time series response body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailySeriesResponse {
    /// Per-day field mappings keyed by `YYYY-MM-DD`, iterated in key order
    #[serde(rename = "Time Series (Daily)")]
    pub time_series: BTreeMap<String, Value>,
}

/// `NEWS_SENTIMENT` response body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewsFeedResponse {
    /// Raw articles; decoded one by one so a single bad entry does not
    /// discard the feed
    #[serde(default)]
    pub feed: Option<Vec<Value>>,
}

/// Extract a provider-level error message from a successfully fetched body
pub fn provider_error(body: &Value) -> Option<String> {
    PROVIDER_ERROR_KEYS.iter().find_map(|key| {
        body.get(*key).map(|message| match message {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quote_without_global_quote_key_fails() {
        let body = json!({"Error Message": "Invalid API call."});
        assert!(serde_json::from_value::<GlobalQuoteResponse>(body).is_err());
    }

    #[test]
    fn test_empty_global_quote_decodes() {
        let body = json!({"Global Quote": {}});
        let decoded: GlobalQuoteResponse = serde_json::from_value(body).unwrap();
        assert!(decoded.global_quote.is_empty());
    }

    #[test]
    fn test_series_requires_daily_key() {
        let body = json!({"Meta Data": {"2. Symbol": "IBM"}});
        assert!(serde_json::from_value::<DailySeriesResponse>(body).is_err());
    }

    #[test]
    fn test_news_feed_is_optional() {
        let decoded: NewsFeedResponse = serde_json::from_value(json!({"items": "0"})).unwrap();
        assert!(decoded.feed.is_none());
    }

    #[test]
    fn test_provider_error_detection() {
        let body = json!({"Information": "rate limit reached"});
        assert_eq!(provider_error(&body).as_deref(), Some("rate limit reached"));
        assert_eq!(provider_error(&json!({"Global Quote": {}})), None);
    }
}
