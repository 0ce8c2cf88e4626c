use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::env;

use crate::cli::error::{CliError, CliResult};

/// Default server address when neither flag nor env var is set
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Error body returned by the API on non-success status codes
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// API client for communicating with the mentorship REST API
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. MENTORSHIP_API_URL environment variable
    /// 3. Default: http://localhost:3000
    pub fn new(api_url: Option<String>) -> Self {
        // reqwest is built without a bundled provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = api_url
            .or_else(|| env::var("MENTORSHIP_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.get(&url)
    }

    /// Create a POST request builder
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.post(&url)
    }

    /// Create a PUT request builder
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.put(&url)
    }

    /// Decode a successful body, or classify the failure via
    /// [`CliError::from_status`] using the server's `{error}` message.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| CliError::UnreadableResponse {
                    message: e.to_string(),
                });
        }

        let status = response.status().as_u16();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorBody>(&error_text)
            .map(|body| body.error)
            .unwrap_or(error_text);
        Err(CliError::from_status(status, message))
    }
}
