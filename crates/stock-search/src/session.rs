//! Search view-state

use crate::chart::ChartData;
use crate::news::{ArticleView, NewsArticle, article_views};
use crate::quote::QuoteResult;
use crate::series::PriceSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one search invocation.
///
/// Increases with every search; `SearchId::default()` is the state before
/// the first search.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SearchId(u64);

impl SearchId {
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Aggregate view-state for one ticker query.
///
/// Each slot is written by exactly one pipeline and is present or absent
/// independently of the others. A new search replaces the whole session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchSession {
    id: SearchId,
    ticker: String,
    quote: Option<QuoteResult>,
    series: Option<PriceSeries>,
    articles: Vec<NewsArticle>,
}

impl SearchSession {
    /// Empty session for a freshly started search
    pub(crate) fn started(id: SearchId, ticker: impl Into<String>) -> Self {
        Self {
            id,
            ticker: ticker.into(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> SearchId {
        self.id
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn quote(&self) -> Option<&QuoteResult> {
        self.quote.as_ref()
    }

    pub fn series(&self) -> Option<&PriceSeries> {
        self.series.as_ref()
    }

    pub fn articles(&self) -> &[NewsArticle] {
        &self.articles
    }

    /// Whether any search has started yet
    pub fn has_searched(&self) -> bool {
        self.id != SearchId::default()
    }

    /// Chart input for the current series, if there is anything to draw
    pub fn chart(&self) -> Option<ChartData> {
        self.series.as_ref().and_then(ChartData::from_series)
    }

    /// Articles with their derived sentiment, in feed order
    pub fn article_views(&self) -> Vec<ArticleView<'_>> {
        article_views(&self.articles)
    }

    pub(crate) fn set_quote(&mut self, quote: QuoteResult) {
        self.quote = Some(quote);
    }

    pub(crate) fn set_series(&mut self, series: PriceSeries) {
        self.series = Some(series);
    }

    pub(crate) fn set_articles(&mut self, articles: Vec<NewsArticle>) {
        self.articles = articles;
    }
}
