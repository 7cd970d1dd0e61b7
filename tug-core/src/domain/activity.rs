//! Activity feed types

use serde::{Deserialize, Serialize};

use crate::domain::job::ExecutionState;

/// One row of the remote activity monitor
///
/// The feed lists every currently-or-recently-active run. Consumers
/// must select the row matching their own task_id/run_id pair — never
/// "the last row seen", which may belong to an unrelated run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Feed entry id, the key the session-log endpoint takes
    pub id: String,
    pub task_id: String,
    pub run_id: u64,
    pub task_name: String,
    #[serde(rename = "executionState")]
    pub state: ExecutionState,
    /// When the run started, if the feed reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    /// When the run ended, present once terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
}

impl ActivityEntry {
    /// Whether this row describes the given run
    pub fn matches(&self, task_id: &str, run_id: u64) -> bool {
        self.task_id == task_id && self.run_id == run_id
    }
}
