//! Tug HTTP Client
//!
//! A type-safe client for a cloud data-integration service's REST API:
//! log in, start a named job, watch the activity feed until the run
//! finishes, fetch the session log.
//!
//! The trigger-and-wait composition lives in [`TaskExecutor`]; hosts
//! that need finer control can drive the individual calls on
//! [`IntegrationClient`] themselves.
//!
//! # Example
//!
//! ```no_run
//! use tug_client::{IntegrationClient, PollConfig, TaskExecutor};
//! use tug_core::domain::session::Credential;
//! use tug_core::domain::task::TaskType;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = IntegrationClient::new(
//!         "https://dm-us.informaticacloud.com/ma/api/v2/user/login",
//!     );
//!     let executor = TaskExecutor::new(
//!         client,
//!         Credential::new("iicsuser_name", "iics_password"),
//!         TaskType::Mapping,
//!         PollConfig::default(),
//!     );
//!
//!     let log = executor.execute("Task_Date_Dim").await?;
//!     println!("{log}");
//!     Ok(())
//! }
//! ```

mod activity;
mod auth;
pub mod error;
mod executor;
mod jobs;
mod poll;
mod service;

// Re-export commonly used types
pub use error::{ApiFailure, ClientError, Result};
pub use executor::TaskExecutor;
pub use poll::{PollConfig, poll_until_terminal};
pub use service::JobService;

use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;

use tug_core::domain::session::Session;

/// Header carrying the session token on every session-scoped call
const SESSION_HEADER: &str = "icSessionId";

/// HTTP client for the remote data-integration API
///
/// Holds the login endpoint and a connection-pooling [`Client`]; the
/// region-specific endpoint for all other calls comes back from login
/// inside the [`Session`].
#[derive(Debug, Clone)]
pub struct IntegrationClient {
    /// Login endpoint (e.g. "https://dm-us.example.com/ma/api/v2/user/login")
    login_url: String,
    /// HTTP client instance
    http: Client,
}

impl IntegrationClient {
    /// Create a new client against the given login endpoint
    pub fn new(login_url: impl Into<String>) -> Self {
        let login_url = login_url.into();
        Self {
            login_url: login_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Create a client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use reqwest::Client;
    /// use std::time::Duration;
    /// use tug_client::IntegrationClient;
    ///
    /// let http = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = IntegrationClient::with_client("https://login.example.com", http);
    /// ```
    pub fn with_client(login_url: impl Into<String>, http: Client) -> Self {
        let login_url = login_url.into();
        Self {
            login_url: login_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// The configured login endpoint
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Start a GET request against a session's region endpoint
    fn session_get(&self, session: &Session, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", session.server_url.trim_end_matches('/'), path);
        self.http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .header(SESSION_HEADER, &session.session_id)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status and deserialize a JSON response body
    ///
    /// The service signals success with HTTP 200 only; anything else
    /// becomes a failure carrying the status and body. A 200 body that
    /// does not parse into the expected shape is also a failure.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> std::result::Result<T, ApiFailure> {
        let text = Self::read_text(response).await?;
        serde_json::from_str(&text).map_err(|e| ApiFailure::Body(e.to_string()))
    }

    /// Check the status and return the raw response body
    async fn read_text(response: reqwest::Response) -> std::result::Result<String, ApiFailure> {
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiFailure::status(status.as_u16(), body));
        }

        response.text().await.map_err(ApiFailure::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = IntegrationClient::new("https://login.example.com/ma/api/v2/user/login");
        assert_eq!(
            client.login_url(),
            "https://login.example.com/ma/api/v2/user/login"
        );
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = IntegrationClient::new("https://login.example.com/");
        assert_eq!(client.login_url(), "https://login.example.com");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http = Client::new();
        let client = IntegrationClient::with_client("https://login.example.com", http);
        assert_eq!(client.login_url(), "https://login.example.com");
    }
}
