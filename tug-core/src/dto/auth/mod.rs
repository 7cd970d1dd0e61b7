//! Login DTOs

use serde::{Deserialize, Serialize};

use crate::domain::session::{Credential, Session};

/// Login request body
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(credential: &Credential) -> Self {
        Self {
            kind: "login",
            username: credential.username.clone(),
            password: credential.password.clone(),
        }
    }
}

/// Fields of a successful login response the client uses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub ic_session_id: String,
    pub server_url: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Session::new(response.ic_session_id, response.server_url)
    }
}
