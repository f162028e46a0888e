//! News feed extraction

use crate::api::models::NewsFeedResponse;
use crate::sentiment::{SentimentCategory, classify};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A sentiment-tagged article from the provider feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Unique within one feed
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(rename = "overall_sentiment_score")]
    pub sentiment_score: f64,
}

impl NewsArticle {
    /// Derived on demand; never stored alongside the score
    pub fn sentiment(&self) -> SentimentCategory {
        classify(self.sentiment_score)
    }

    /// Label for the article link: the first author, if any
    pub fn source_label(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}

/// An article paired with its derived category, for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleView<'a> {
    pub article: &'a NewsArticle,
    pub sentiment: SentimentCategory,
}

impl<'a> ArticleView<'a> {
    pub fn new(article: &'a NewsArticle) -> Self {
        Self {
            article,
            sentiment: article.sentiment(),
        }
    }
}

/// Classify a list of articles for display, preserving feed order
pub fn article_views(articles: &[NewsArticle]) -> Vec<ArticleView<'_>> {
    articles.iter().map(ArticleView::new).collect()
}

/// Pull the article list out of a decoded feed.
///
/// A missing feed yields no articles. Entries that do not decode are
/// skipped, as are repeated titles after their first occurrence.
pub fn extract_articles(response: NewsFeedResponse) -> Vec<NewsArticle> {
    let Some(feed) = response.feed else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    feed.into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match serde_json::from_value::<NewsArticle>(raw) {
            Ok(article) => Some(article),
            Err(e) => {
                tracing::warn!(index, "Skipping malformed news article: {}", e);
                None
            }
        })
        .filter(|article| seen.insert(article.title.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feed(items: serde_json::Value) -> NewsFeedResponse {
        serde_json::from_value(json!({ "items": "3", "feed": items })).unwrap()
    }

    #[test]
    fn test_extract_articles() {
        let articles = extract_articles(feed(json!([
            {
                "title": "Chipmaker beats estimates",
                "url": "https://news.example/a",
                "summary": "Revenue rose.",
                "authors": ["Jane Doe", "John Roe"],
                "overall_sentiment_score": 0.31,
                "overall_sentiment_label": "Somewhat-Bullish"
            },
            {
                "title": "Guidance cut",
                "url": "https://news.example/b",
                "summary": "Shares fell.",
                "authors": [],
                "overall_sentiment_score": -0.2
            }
        ])));

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].source_label(), Some("Jane Doe"));
        assert_eq!(articles[0].sentiment(), SentimentCategory::Positive);
        assert_eq!(articles[1].source_label(), None);
        assert_eq!(articles[1].sentiment(), SentimentCategory::Negative);
    }

    #[test]
    fn test_missing_feed_is_empty() {
        let response: NewsFeedResponse = serde_json::from_value(json!({})).unwrap();
        assert!(extract_articles(response).is_empty());
    }

    #[test]
    fn test_malformed_and_duplicate_articles_are_skipped() {
        let articles = extract_articles(feed(json!([
            {"title": "A", "overall_sentiment_score": 0.05},
            {"summary": "no title", "overall_sentiment_score": 0.5},
            {"title": "B", "overall_sentiment_score": "high"},
            {"title": "A", "overall_sentiment_score": 0.9}
        ])));

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "A");
        assert_eq!(articles[0].sentiment(), SentimentCategory::Neutral);
    }

    #[test]
    fn test_views_keep_feed_order() {
        let articles = extract_articles(feed(json!([
            {"title": "first", "overall_sentiment_score": 0.0},
            {"title": "second", "overall_sentiment_score": 0.15}
        ])));
        let views = article_views(&articles);

        assert_eq!(views[0].article.title, "first");
        assert_eq!(views[0].sentiment, SentimentCategory::Negative);
        assert_eq!(views[1].sentiment, SentimentCategory::Positive);
    }
}
