//! Tracker backend HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::ErrorResponse;
use crate::domain::entities::{CryptoId, CryptoSummary, SavedCrypto};
use crate::domain::errors::ApiError;
use crate::domain::ports::CryptoApiPort;

const USER_AGENT: &str = concat!("cryptodesk/", env!("CARGO_PKG_VERSION"));

/// REST adapter for the cryptocurrency tracker backend.
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    /// Creates client for the backend at `base_url`.
    ///
    /// Requests never time out when `timeout` is `None`.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Self::with_http_client(base_url, client)
    }

    /// Creates client reusing a prepared [`Client`].
    ///
    /// # Errors
    /// Returns error if the URL is invalid or cannot carry path segments.
    pub fn with_http_client(base_url: &str, client: Client) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::unexpected(format!("invalid backend URL '{base_url}': {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::unexpected(format!(
                "backend URL '{base_url}' cannot carry a path"
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Builds an endpoint URL; each segment is percent-encoded on its own.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::unexpected("backend URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, method: Method, url: Url) -> Result<Response, ApiError> {
        debug!(method = %method, url = %url, "Sending backend request");

        let response = self
            .client
            .request(method.clone(), url)
            .send()
            .await
            .map_err(|e| {
                warn!(method = %method, error = %e, "Failed to reach backend");
                if e.is_timeout() {
                    ApiError::network("request timed out")
                } else if e.is_connect() {
                    ApiError::network("failed to connect to backend")
                } else {
                    ApiError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        Ok(response)
    }

    async fn handle_error_response(status: StatusCode, response: Response) -> ApiError {
        let detail = match response.json::<ErrorResponse>().await {
            Ok(body) => body.into_detail(),
            Err(e) => {
                debug!(status = %status, error = %e, "Error response carried no JSON body");
                None
            }
        };

        warn!(status = %status, detail = ?detail, "Backend rejected request");
        ApiError::rejected(status.as_u16(), detail)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, "Failed to parse backend response");
            ApiError::decode(e.to_string())
        })
    }
}

#[async_trait]
impl CryptoApiPort for BackendClient {
    async fn fetch_info(&self, crypto_id: &CryptoId) -> Result<CryptoSummary, ApiError> {
        let url = self.endpoint(&["cryptocurrency", "info", crypto_id.as_str()])?;
        let response = self.send(Method::GET, url).await?;
        Self::decode(response).await
    }

    async fn fetch_saved(&self) -> Result<Vec<SavedCrypto>, ApiError> {
        let url = self.endpoint(&["cryptocurrencies"])?;
        let response = self.send(Method::GET, url).await?;
        Self::decode(response).await
    }

    async fn save(&self, crypto_id: &CryptoId) -> Result<(), ApiError> {
        let mut url = self.endpoint(&["cryptocurrency"])?;
        url.query_pairs_mut()
            .append_pair("crypto_id", crypto_id.as_str());
        self.send(Method::POST, url).await.map(|_| ())
    }

    async fn update(&self, crypto_id: &CryptoId) -> Result<(), ApiError> {
        let url = self.endpoint(&["cryptocurrency", crypto_id.as_str()])?;
        self.send(Method::PUT, url).await.map(|_| ())
    }

    async fn delete(&self, crypto_id: &CryptoId) -> Result<(), ApiError> {
        let url = self.endpoint(&["cryptocurrency", crypto_id.as_str()])?;
        self.send(Method::DELETE, url).await.map(|_| ())
    }
}
