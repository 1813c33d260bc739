//! Practicum homework statuses API client.

use crate::traits::HomeworkSource;
use async_trait::async_trait;
use homework_common::{mask_secret, truncate_string, Cursor, HomeworkError, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Longest slice of an error response body kept for diagnostics.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Configuration for the Practicum API client
#[derive(Clone)]
pub struct ClientConfig {
    /// Homework statuses endpoint
    pub endpoint: String,
    /// OAuth token for the `Authorization` header
    pub token: String,
    /// Request timeout (default: 30 seconds)
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the minimum required parameters
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &mask_secret(&self.token))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Practicum API client
#[derive(Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: Url,
    token: String,
}

impl PracticumClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            HomeworkError::config(format!("Invalid Practicum endpoint '{}': {e}", config.endpoint))
        })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HomeworkError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            endpoint,
            token: config.token,
        })
    }

    /// The endpoint this client queries.
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Requests every status change made since `cursor`.
    ///
    /// Only transport and HTTP-level failures are reported here; the shape of
    /// the decoded JSON is checked by [`crate::check_response`].
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_statuses(&self, cursor: Cursor) -> Result<Value> {
        debug!("Requesting homework statuses from_date={}", cursor);

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", cursor.0)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Request timeout: {}", e);
                    HomeworkError::network_with_source("Request timeout", e)
                } else if e.is_connect() {
                    warn!("Connection error: {}", e);
                    HomeworkError::network_with_source("Connection error", e)
                } else {
                    error!("Request failed: {}", e);
                    HomeworkError::network_with_source("Request failed", e)
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| HomeworkError::network_with_source("Failed to read response body", e))?;

        if !status.is_success() {
            error!("API returned {}", status);
            return Err(self.bad_response(status, &text));
        }

        debug!("Response body: {}", truncate_string(&text, MAX_ERROR_BODY_CHARS));
        Ok(serde_json::from_str(&text)?)
    }

    fn bad_response(&self, status: StatusCode, body: &str) -> HomeworkError {
        HomeworkError::bad_response(
            self.endpoint.as_str(),
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            truncate_string(body, MAX_ERROR_BODY_CHARS),
        )
    }
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &mask_secret(&self.token))
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, cursor: Cursor) -> Result<Value> {
        self.fetch_statuses(cursor).await
    }

    fn name(&self) -> &'static str {
        "practicum"
    }
}
