//! PlacePicker REST API Client
//!
//! HTTP client for the PlacePicker API, used by the command-line tool.
//! Requests are sent once; failures are reported, never retried.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::dto::{
    HealthResponse, PlacesResponse, ReplaceUserPlacesRequest, ReplaceUserPlacesResponse,
    UserPlacesResponse,
};
use crate::api::error::ErrorResponse;
use crate::storage::Place;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:3000")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }
}

/// PlacePicker REST API client
pub struct PlacesClient {
    client: Client,
    config: ClientConfig,
}

impl PlacesClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Fetch the place catalog
    pub async fn fetch_places(&self) -> Result<Vec<Place>, ClientError> {
        let response = self.client.get(self.url("/places")).send().await?;
        let body: PlacesResponse = parse(response).await?;
        Ok(body.places)
    }

    /// Fetch the saved list together with its version
    pub async fn fetch_user_places(&self) -> Result<UserPlacesResponse, ClientError> {
        let response = self.client.get(self.url("/user-places")).send().await?;
        parse(response).await
    }

    /// Replace the saved list
    ///
    /// With `version` set the server refuses the write if the list changed
    /// since that version was read.
    pub async fn replace_user_places(
        &self,
        places: Vec<Place>,
        version: Option<u64>,
    ) -> Result<ReplaceUserPlacesResponse, ClientError> {
        let body = ReplaceUserPlacesRequest { places, version };

        let response = self
            .client
            .put(self.url("/user-places"))
            .json(&body)
            .send()
            .await?;
        parse(response).await
    }

    /// Check API health
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self.client.get(self.url("/health")).send().await?;
        parse(response).await
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let error = serde_json::from_str::<ErrorResponse>(&text).ok();

    match error {
        Some(error) if error.code == "VERSION_CONFLICT" => Err(ClientError::Conflict(error.message)),
        Some(error) => Err(ClientError::Api {
            status: status.as_u16(),
            message: error.message,
        }),
        None => Err(ClientError::Api {
            status: status.as_u16(),
            message: text,
        }),
    }
}

/// Errors that can occur when talking to the API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Saved list was changed elsewhere: {0}")]
    Conflict(String),
}
