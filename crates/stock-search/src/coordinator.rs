//! Search coordination
//!
//! A search resets the session, then runs the quote, series and news
//! pipelines concurrently. Every pipeline writes only its own slot, and only
//! while its search is still the active one: results that arrive after a
//! newer search has started are dropped.

use crate::api::ProviderClient;
use crate::chart::{ChartData, ChartRenderer};
use crate::news::extract_articles;
use crate::quote::{QuoteResult, normalize_quote};
use crate::series::transform_series;
use crate::session::{SearchId, SearchSession};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Owns the search session and drives the three fetch pipelines
#[derive(Clone)]
pub struct SearchCoordinator {
    client: Arc<dyn ProviderClient>,
    state: Arc<watch::Sender<SearchSession>>,
    chart_renderer: Option<Arc<dyn ChartRenderer>>,
}

impl SearchCoordinator {
    pub fn new(client: Arc<dyn ProviderClient>) -> Self {
        let (state, _) = watch::channel(SearchSession::default());
        Self {
            client,
            state: Arc::new(state),
            chart_renderer: None,
        }
    }

    /// Attach the chart widget that draws each new non-empty series
    pub fn with_chart_renderer(mut self, renderer: Arc<dyn ChartRenderer>) -> Self {
        self.chart_renderer = Some(renderer);
        self
    }

    /// Current session state
    pub fn snapshot(&self) -> SearchSession {
        self.state.borrow().clone()
    }

    /// Receiver notified on every reset and every accepted slot write
    pub fn subscribe(&self) -> watch::Receiver<SearchSession> {
        self.state.subscribe()
    }

    /// Initial search run when the dashboard first opens, with no ticker
    pub async fn mount(&self) -> SearchId {
        self.search("").await
    }

    /// Run a search to completion.
    ///
    /// Returns once all three pipelines have settled. Slots fill in as each
    /// pipeline finishes; observers see them through [`Self::subscribe`].
    pub async fn search(&self, ticker: impl Into<String>) -> SearchId {
        let ticker = ticker.into();
        let id = self.begin(&ticker);
        self.run_pipelines(id, &ticker).await;
        id
    }

    /// Start a search in the background.
    ///
    /// The session is reset before this returns, so a caller that reads a
    /// snapshot right away never sees the previous search's results.
    pub fn spawn_search(&self, ticker: impl Into<String>) -> JoinHandle<SearchId> {
        let ticker = ticker.into();
        let id = self.begin(&ticker);
        let coordinator = self.clone();
        tokio::spawn(async move {
            coordinator.run_pipelines(id, &ticker).await;
            id
        })
    }

    /// Clear all slots and make a new search the active one
    fn begin(&self, ticker: &str) -> SearchId {
        let mut id = SearchId::default();
        self.state.send_modify(|session| {
            id = session.id().next();
            *session = SearchSession::started(id, ticker);
        });
        tracing::info!(search = %id, ticker, "Starting search");
        id
    }

    async fn run_pipelines(&self, id: SearchId, ticker: &str) {
        tokio::join!(
            self.run_quote(id, ticker),
            self.run_series(id, ticker),
            self.run_news(id, ticker),
        );
        tracing::debug!(search = %id, ticker, "Search pipelines settled");
    }

    async fn run_quote(&self, id: SearchId, ticker: &str) {
        let result = match self.client.fetch_quote(ticker).await {
            Ok(response) => normalize_quote(&response),
            Err(e) => {
                tracing::warn!(search = %id, ticker, "Quote request failed: {}", e);
                QuoteResult::transport_error()
            }
        };

        if result == QuoteResult::NotFound {
            tracing::info!(search = %id, ticker, "Provider has no quote for symbol");
        }

        self.commit(id, "quote", |session| session.set_quote(result));
    }

    async fn run_series(&self, id: SearchId, ticker: &str) {
        let series = match self.client.fetch_series(ticker).await {
            Ok(response) => transform_series(&response),
            Err(e) => {
                // No chart is the whole failure mode for this pipeline
                tracing::warn!(search = %id, ticker, "Series request failed: {}", e);
                return;
            }
        };

        let chart = ChartData::from_series(&series);
        let accepted = self.commit(id, "series", |session| session.set_series(series));

        if let (true, Some(chart)) = (accepted, chart) {
            self.render_if_current(id, &chart);
        }
    }

    /// Draw `chart` unless a newer search has started since it was committed.
    ///
    /// The session stays borrowed while the renderer runs, so a reset waits
    /// for the draw to finish. Renderers must not call back into the
    /// coordinator.
    fn render_if_current(&self, id: SearchId, chart: &ChartData) -> bool {
        let Some(renderer) = &self.chart_renderer else {
            return false;
        };

        let session = self.state.borrow();
        if session.id() != id {
            tracing::debug!(search = %id, "Skipping chart of superseded search");
            return false;
        }
        renderer.render(chart);
        drop(session);
        true
    }

    async fn run_news(&self, id: SearchId, ticker: &str) {
        let articles = match self.client.fetch_news(ticker).await {
            Ok(response) => extract_articles(response),
            Err(e) => {
                tracing::warn!(search = %id, ticker, "News request failed: {}", e);
                Vec::new()
            }
        };

        self.commit(id, "news", |session| session.set_articles(articles));
    }

    /// Apply `write` if `id` is still the active search
    fn commit(&self, id: SearchId, slot: &'static str, write: impl FnOnce(&mut SearchSession)) -> bool {
        let accepted = self.state.send_if_modified(|session| {
            if session.id() != id {
                return false;
            }
            write(session);
            true
        });

        if !accepted {
            tracing::debug!(search = %id, slot, "Discarding result of superseded search");
        }
        accepted
    }
}
