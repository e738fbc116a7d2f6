//! HTTP client for the matching API.

use crate::error::Error;
use crate::types::*;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Option Matching API.
#[derive(Debug, Clone)]
pub struct MatchingClient {
    client: Client,
    base_url: Url,
}

impl MatchingClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let mut base_url = Url::parse(&config.base_url)?;
        // Endpoints are joined as relative paths, which keeps any path prefix
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Base URL requests are sent to, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    // ========================================================================
    // Health & Stats
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = self.endpoint("/health")?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets request statistics.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_stats(&self) -> Result<StatsResponse, Error> {
        let url = self.endpoint("/api/v1/stats")?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Legs & Combinations
    // ========================================================================

    /// Gets the combination catalog in resolution order.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_catalog(&self) -> Result<CatalogResponse, Error> {
        let url = self.endpoint("/api/v1/combinations/catalog")?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Validates legs without calculating.
    ///
    /// # Errors
    /// Returns error if the request fails or the request is empty or too
    /// large. Invalid legs are reported in the response, not as an error.
    pub async fn validate_legs(&self, legs: Vec<LegInput>) -> Result<ValidateLegsResponse, Error> {
        let url = self.endpoint("/api/v1/legs/validate")?;
        let resp = self
            .client
            .post(url)
            .json(&LegsRequest { legs })
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Matches legs into combinations.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRequest`] with the per-leg issues if any leg is
    /// invalid, or another error if the request fails.
    pub async fn calculate(&self, legs: Vec<LegInput>) -> Result<CalculateResponse, Error> {
        let url = self.endpoint("/api/v1/combinations/calculate")?;
        let resp = self
            .client
            .post(url)
            .json(&LegsRequest { legs })
            .send()
            .await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else if status == StatusCode::NOT_FOUND {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::NotFound(text))
        } else if status == StatusCode::BAD_REQUEST {
            let text = resp.text().await.unwrap_or_default();
            Err(bad_request_error(&text))
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

/// Maps a 400 body to an error, keeping the raw text if it is not JSON.
fn bad_request_error(body: &str) -> Error {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => Error::InvalidRequest {
            code: response.code,
            message: response.error,
            issues: response.issues,
        },
        Err(_) => Error::Api {
            status: StatusCode::BAD_REQUEST.as_u16(),
            message: body.to_string(),
        },
    }
}
