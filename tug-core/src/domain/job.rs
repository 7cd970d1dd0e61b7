//! Job run identity and execution states

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one run of a remote task
///
/// Assigned by the service when the job starts. The task_id/run_id pair
/// is immutable and is the sole key for matching activity-feed entries
/// and log requests; any other selection is a bug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRun {
    pub task_id: String,
    pub run_id: u64,
    pub task_name: String,
}

/// Execution state labels reported by the activity feed
///
/// The client partitions these into in-flight and terminal and performs
/// no further interpretation: success and failure labels are both just
/// "finished". Labels outside the known set deserialize as `Other` and
/// count as terminal, since the in-flight set is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionState {
    Running,
    Initialized,
    Stopping,
    Queued,
    Completed,
    Success,
    Warning,
    Failed,
    Stopped,
    #[serde(untagged)]
    Other(String),
}

impl ExecutionState {
    /// Whether the run has not yet finished on the remote side
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            Self::Running | Self::Initialized | Self::Stopping | Self::Queued
        )
    }
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Running => "RUNNING",
            Self::Initialized => "INITIALIZED",
            Self::Stopping => "STOPPING",
            Self::Queued => "QUEUED",
            Self::Completed => "COMPLETED",
            Self::Success => "SUCCESS",
            Self::Warning => "WARNING",
            Self::Failed => "FAILED",
            Self::Stopped => "STOPPED",
            Self::Other(label) => label,
        };
        f.write_str(label)
    }
}
