use std::time::Duration;

use newsreader_core::{Filter, PageRequest};

use crate::wire::{WireFailure, WireSearchResponse};
use crate::{SearchError, SearchErrorKind, SearchPage};

/// Connection settings for the upstream search API.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub base_url: String,
    pub api_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2".to_string(),
            api_key: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, request: &PageRequest) -> Result<SearchPage, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchClient {
    settings: SearchSettings,
}

impl ReqwestSearchClient {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SearchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SearchError::new(SearchErrorKind::Network, err.to_string()))
    }

    fn endpoint_url(&self, request: &PageRequest) -> Result<reqwest::Url, SearchError> {
        // A free-text query searches everything; both headline modes share
        // one endpoint and differ only in parameters.
        let endpoint = match request.filter {
            Filter::Query(_) => "everything",
            Filter::Category(_) | Filter::Country(_) => "top-headlines",
        };
        let raw = format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            endpoint
        );
        reqwest::Url::parse(&raw)
            .map_err(|err| SearchError::new(SearchErrorKind::InvalidUrl, err.to_string()))
    }

    fn query_params(&self, request: &PageRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", request.page.to_string()),
            ("pageSize", request.page_size.to_string()),
        ];
        match &request.filter {
            Filter::Query(query) => {
                params.push(("q", query.clone()));
                params.push(("sortBy", "publishedAt".to_string()));
            }
            Filter::Category(category) => {
                params.push(("category", category.as_str().to_string()));
            }
            Filter::Country(country) => {
                params.push(("country", country.clone()));
            }
        }
        params.push(("apiKey", self.settings.api_key.clone()));
        params
    }
}

#[async_trait::async_trait]
impl SearchClient for ReqwestSearchClient {
    async fn search(&self, request: &PageRequest) -> Result<SearchPage, SearchError> {
        let client = self.build_client()?;
        let url = self.endpoint_url(request)?;

        let response = client
            .get(url)
            .query(&self.query_params(request))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<WireFailure>(&body)
                .ok()
                .and_then(|failure| failure.message)
                .unwrap_or_else(|| format!("HTTP error (status {})", status.as_u16()));
            return Err(SearchError::new(
                SearchErrorKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let wire: WireSearchResponse = response.json().await.map_err(map_reqwest_error)?;
        Ok(wire.into())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(SearchErrorKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return SearchError::new(SearchErrorKind::Decode, err.to_string());
    }
    SearchError::new(SearchErrorKind::Network, err.to_string())
}
