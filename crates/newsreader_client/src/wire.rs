//! Serde models for the upstream response shape.

use chrono::{DateTime, Utc};
use newsreader_core::Article;
use serde::Deserialize;

use crate::SearchPage;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireSearchResponse {
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<WireArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireArticle {
    pub source: WireSource,
    #[serde(default)]
    pub author: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSource {
    #[serde(default)]
    pub name: String,
}

/// Error body the upstream returns alongside a non-2xx status.
#[derive(Debug, Deserialize)]
pub(crate) struct WireFailure {
    #[serde(default)]
    pub message: Option<String>,
}

impl From<WireArticle> for Article {
    fn from(wire: WireArticle) -> Self {
        Article {
            url: wire.url,
            title: wire.title,
            description: wire.description,
            content: wire.content,
            image_url: wire.url_to_image,
            author: wire.author,
            published_at: wire.published_at,
            source_name: wire.source.name,
        }
    }
}

impl From<WireSearchResponse> for SearchPage {
    fn from(wire: WireSearchResponse) -> Self {
        SearchPage {
            total_results: wire.total_results,
            articles: wire.articles.into_iter().map(Article::from).collect(),
        }
    }
}
