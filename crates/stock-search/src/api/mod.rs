//! Provider clients for quote, daily series and news data

pub mod alpha_vantage;
pub mod models;

pub use alpha_vantage::AlphaVantageClient;
pub use models::{DailySeriesResponse, GlobalQuoteResponse, NewsFeedResponse};

use crate::error::Result;
use async_trait::async_trait;

/// The three request kinds a search issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Current quote
    Quote,
    /// Historical daily prices
    Series,
    /// Sentiment-tagged news feed
    News,
}

impl QueryKind {
    /// Query parameter that carries the ticker for this request kind
    pub const fn symbol_param(self) -> &'static str {
        match self {
            Self::Quote | Self::Series => "symbol",
            Self::News => "tickers",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Series => "series",
            Self::News => "news",
        }
    }
}

/// One typed request per query kind against the remote provider.
///
/// Implementations make exactly one attempt per call and never touch
/// search state; callers own what happens with the result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Fetch the current quote for `symbol`
    async fn fetch_quote(&self, symbol: &str) -> Result<GlobalQuoteResponse>;

    /// Fetch the daily price series for `symbol`
    async fn fetch_series(&self, symbol: &str) -> Result<DailySeriesResponse>;

    /// Fetch the news feed mentioning `symbol`
    async fn fetch_news(&self, symbol: &str) -> Result<NewsFeedResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_param_per_kind() {
        assert_eq!(QueryKind::Quote.symbol_param(), "symbol");
        assert_eq!(QueryKind::Series.symbol_param(), "symbol");
        assert_eq!(QueryKind::News.symbol_param(), "tickers");
    }
}
