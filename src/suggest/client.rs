//! HTTP client for the suggest backend's popular-word query.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

/// A parameterized popular-word query, scoped by the request's filter
/// dimensions and bounded by the result size and ranking window.
#[derive(Debug, Clone, Serialize)]
pub struct PopularWordQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    pub tags: Vec<String>,
    pub roles: Vec<String>,
    pub fields: Vec<String>,
    pub excludes: Vec<String>,
    /// Number of ranked terms to return.
    pub size: u32,
    /// How much underlying data the backend scans to rank terms.
    pub window_size: u32,
}

/// A single ranked term returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestTerm {
    pub text: String,
}

/// Response envelope of the popular-word endpoint.
#[derive(Debug, Deserialize)]
struct PopularWordsBody {
    items: Vec<SuggestTerm>,
}

/// Error types for the suggest backend client.
#[derive(Debug, thiserror::Error)]
pub enum SuggestClientError {
    #[error("suggest backend returned HTTP {status} for {url}")]
    BadStatus { status: u16, url: String },
    #[error("failed to parse suggest backend response")]
    ParseFailed {
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    RequestFailed(#[from] anyhow::Error),
}

/// Executes popular-word queries against a suggest backend.
#[async_trait]
pub trait SuggestClient: Send + Sync {
    /// Run a popular-word query, returning ranked terms in backend order.
    async fn popular_words(
        &self,
        query: &PopularWordQuery,
    ) -> Result<Vec<SuggestTerm>, SuggestClientError>;
}

/// `SuggestClient` backed by the suggest backend's HTTP API.
pub struct HttpSuggestClient {
    http: reqwest::Client,
    endpoint: Url,
}

/// Query path relative to the configured base URL.
const POPULAR_WORDS_PATH: &str = "suggest/popular-words";

impl HttpSuggestClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        // `Url::join` replaces the last path segment unless the base ends
        // with a slash.
        let mut base = base_url.to_owned();
        if !base.ends_with('/') {
            base.push('/');
        }
        let endpoint = Url::parse(&base)?.join(POPULAR_WORDS_PATH)?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }
}

#[async_trait]
impl SuggestClient for HttpSuggestClient {
    async fn popular_words(
        &self,
        query: &PopularWordQuery,
    ) -> Result<Vec<SuggestTerm>, SuggestClientError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(query)
            .send()
            .await
            .map_err(|e| SuggestClientError::RequestFailed(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestClientError::BadStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body: PopularWordsBody = response
            .json()
            .await
            .map_err(|e| SuggestClientError::ParseFailed { source: e.into() })?;
        Ok(body.items)
    }
}
