//! Credential and session types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Login credential pair
///
/// Supplied once per process and held in memory only. The type does not
/// implement `Serialize` and its `Debug` output redacts the password, so
/// the secret cannot reach logs or wire captures by accident; only the
/// login request DTO ever writes it out.
#[derive(Clone)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Short-lived authorization for one executor invocation
///
/// Produced by login. The token's expiry is controlled by the remote
/// service, so a session is treated as single-use: every invocation
/// obtains its own and never shares it with concurrent invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session token, sent as the `icSessionId` header
    pub session_id: String,
    /// Region-specific base URL all session-scoped calls target
    pub server_url: String,
}

impl Session {
    /// Create a session from a token and endpoint pair
    pub fn new(session_id: impl Into<String>, server_url: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            server_url: server_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credential = Credential::new("infa", "hunter2");
        let rendered = format!("{:?}", credential);
        assert!(rendered.contains("infa"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
