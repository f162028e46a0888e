//! Ticker search orchestration
//!
//! Given a ticker symbol, this crate fetches three independent pieces of data
//! from the quote/news provider and folds them into one view-state:
//!
//! - Current quote (`GLOBAL_QUOTE`), normalized into found / not found /
//!   transport failure
//! - Daily price history, turned into an ascending series for charting
//! - Sentiment-tagged news, classified as positive, negative or neutral
//!
//! # Architecture
//!
//! `SearchCoordinator` owns the `SearchSession`. Each search resets the
//! session and runs three pipelines concurrently:
//! - quote: `ProviderClient::fetch_quote` → `normalize_quote`
//! - series: `ProviderClient::fetch_series` → `transform_series` → `ChartRenderer`
//! - news: `ProviderClient::fetch_news` → `extract_articles`
//!
//! A failing pipeline only affects its own slot, and results from a search
//! that has since been superseded are discarded.
//!
//! # Example
//!
//! ```rust,ignore
//! use stock_search::{AlphaVantageClient, SearchConfig, SearchCoordinator};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SearchConfig::from_env()?;
//!     let client = Arc::new(AlphaVantageClient::new(&config)?);
//!     let coordinator = SearchCoordinator::new(client);
//!
//!     coordinator.search("IBM").await;
//!     let session = coordinator.snapshot();
//!     println!("{:?}", session.quote());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod companies;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod news;
pub mod quote;
pub mod sentiment;
pub mod series;
pub mod session;

// Re-export main types for convenience
pub use api::{AlphaVantageClient, ProviderClient, QueryKind};
pub use chart::{ChartData, ChartRenderer};
pub use companies::CompanyDirectory;
pub use config::SearchConfig;
pub use coordinator::SearchCoordinator;
pub use error::{Result, StockError};
pub use news::{ArticleView, NewsArticle};
pub use quote::{Quote, QuoteResult};
pub use sentiment::{SentimentCategory, classify};
pub use series::{PricePoint, PriceSeries};
pub use session::{SearchId, SearchSession};
