//! Semantic Scholar API client.
//!
//! One request per call: no pagination, no retries, no caching. Timeouts come
//! from [`Config`].

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::SearchResult;

/// Largest page the search endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client.
    client: Client,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Request timeout, reported on timeouts.
    request_timeout: Duration,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            graph_api_url: config.graph_api_url.clone(),
            request_timeout: config.request_timeout,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Relevance search for papers.
    ///
    /// `year` is a Semantic Scholar year filter (`2020`, `-2019`, `2021-`).
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_papers(
        &self,
        query: &str,
        year: Option<&str>,
        min_citation_count: Option<i32>,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<SearchResult> {
        let url = format!("{}/paper/search", self.graph_api_url);

        let mut params = vec![
            ("query".to_string(), query.to_string()),
            ("limit".to_string(), limit.min(MAX_PAGE_SIZE).to_string()),
            ("fields".to_string(), fields.join(",")),
        ];

        if let Some(year) = year {
            params.push(("year".to_string(), year.to_string()));
        }

        if let Some(min) = min_citation_count {
            params.push(("minCitationCount".to_string(), min.to_string()));
        }

        self.get(&url, &params).await
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(url, ?params, "Semantic Scholar request");

        let response = self.client.get(url).query(params).send().await.map_err(|e| {
            if e.is_timeout() { ClientError::Timeout(self.request_timeout) } else { e.into() }
        })?;

        let response = self.handle_response(response).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        tracing::warn!(status = status.as_u16(), "Semantic Scholar returned an error status");

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient").field("has_api_key", &self.has_api_key()).finish()
    }
}
