//! Login endpoint

use reqwest::header;
use tracing::debug;

use crate::IntegrationClient;
use crate::error::{ClientError, Result};
use tug_core::domain::session::{Credential, Session};
use tug_core::dto::auth::{LoginRequest, LoginResponse};

impl IntegrationClient {
    /// Exchange a credential pair for a session
    ///
    /// One network call, no retries: a transport failure surfaces
    /// immediately as [`ClientError::Auth`] with the cause attached.
    /// A 200 body missing `icSessionId` or `serverUrl` is also an
    /// authentication failure.
    ///
    /// The returned session is valid until the service expires it;
    /// treat it as single-use per unit of work and let each concurrent
    /// invocation log in on its own.
    pub async fn login(&self, credential: &Credential) -> Result<Session> {
        let response = self
            .http
            .post(&self.login_url)
            .header(header::ACCEPT, "application/json")
            .json(&LoginRequest::new(credential))
            .send()
            .await
            .map_err(|e| ClientError::Auth { source: e.into() })?;

        let body: LoginResponse = Self::read_json(response)
            .await
            .map_err(|source| ClientError::Auth { source })?;

        debug!(username = %credential.username, server_url = %body.server_url, "logged in");

        Ok(body.into())
    }
}
