//! Configuration module
//!
//! Holds the settings shared by every command: login endpoint,
//! credential pair, and HTTP timeout.

use anyhow::Context;
use std::time::Duration;

use tug_client::IntegrationClient;
use tug_core::domain::session::Credential;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Login endpoint of the data-integration service
    pub login_url: String,
    /// Account credential; the Debug impl keeps the password out of logs
    pub credential: Credential,
    /// Per-request HTTP timeout
    pub http_timeout: Duration,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.login_url.starts_with("http://") && !self.login_url.starts_with("https://") {
            anyhow::bail!("login URL must start with http:// or https://");
        }

        if self.credential.username.is_empty() {
            anyhow::bail!("username cannot be empty");
        }

        if self.credential.password.is_empty() {
            anyhow::bail!("password cannot be empty");
        }

        if self.http_timeout.is_zero() {
            anyhow::bail!("HTTP timeout must be greater than 0");
        }

        Ok(())
    }

    /// Build an API client honoring the configured HTTP timeout
    pub fn client(&self) -> anyhow::Result<IntegrationClient> {
        let http = reqwest::Client::builder()
            .timeout(self.http_timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(IntegrationClient::with_client(self.login_url.clone(), http))
    }
}
