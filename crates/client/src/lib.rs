//! HTTP consumption of the sample-tracking backend. The endpoints are owned
//! by the backend; this crate only issues the GETs and decodes the responses
//! into [`labdash_core`] types. No retries, no backoff: a failure is
//! reported once and contained to the widget that asked.

use serde::de::DeserializeOwned;
use thiserror::Error;

use labdash_core::badge::BadgePayload;
use labdash_core::suggest::SuggestionItem;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Shared client for all dashboard fetches. Cheap to clone; holds only the
/// connection pool.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// GET the suggestion endpoint, passing the typed text as the `term`
    /// parameter.
    pub async fn suggestions(
        &self,
        endpoint: &str,
        term: &str,
    ) -> Result<Vec<SuggestionItem>, ClientError> {
        self.get_json(endpoint, &[("term", term)]).await
    }

    /// GET one badge-count endpoint. No parameters beyond the session.
    pub async fn badge(&self, url: &str) -> Result<BadgePayload, ClientError> {
        self.get_json(url, &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        tracing::debug!(url, "dashboard fetch");
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| ClientError::Transport { url: url.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { url: url.to_string(), status });
        }

        response
            .json()
            .await
            .map_err(|source| ClientError::Decode { url: url.to_string(), source })
    }
}
