//! Error types for the tug client

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Why a single remote call failed
///
/// Carried inside [`ClientError`] so every error still names the stage
/// it came from.
#[derive(Debug, Error)]
pub enum ApiFailure {
    /// The request never completed
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-200 status
    #[error("status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the service
        body: String,
    },

    /// A 200 response whose body was not the expected shape
    #[error("unexpected response body: {0}")]
    Body(String),
}

impl ApiFailure {
    /// Create a status failure from a code and body
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// The HTTP status code, when the service answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Body(_) => None,
        }
    }
}

/// Errors surfaced by the client, named by the stage that failed
///
/// No variant wraps another stage's error, so a caller always knows
/// whether authentication, the launch, a feed query, or the log fetch
/// went wrong.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Login was rejected or its response was unusable
    #[error("authentication failed: {source}")]
    Auth {
        #[source]
        source: ApiFailure,
    },

    /// The job-start request failed
    #[error("failed to start job {task_name}: {source}")]
    Launch {
        task_name: String,
        #[source]
        source: ApiFailure,
    },

    /// An activity-feed query failed while waiting for the run
    #[error("activity feed query failed: {source}")]
    ActivityQuery {
        #[source]
        source: ApiFailure,
    },

    /// The run was still in flight when the polling deadline passed
    #[error("run {run_id} of task {task_id} still in flight after {waited:?}")]
    PollTimeout {
        task_id: String,
        run_id: u64,
        waited: Duration,
    },

    /// The session-log request failed
    #[error("failed to fetch session log for entry {entry_id}: {source}")]
    LogFetch {
        entry_id: String,
        #[source]
        source: ApiFailure,
    },
}

impl ClientError {
    /// The HTTP status the failing stage saw, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { source }
            | Self::Launch { source, .. }
            | Self::ActivityQuery { source }
            | Self::LogFetch { source, .. } => source.status_code(),
            Self::PollTimeout { .. } => None,
        }
    }

    /// Whether this is the polling deadline expiring
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::PollTimeout { .. })
    }
}
