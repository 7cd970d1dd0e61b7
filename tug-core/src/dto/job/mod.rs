//! Job launch DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::JobRun;
use crate::domain::task::TaskType;

/// Request to start one run of a named task
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartJobRequest {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub task_name: String,
    pub task_type: TaskType,
}

impl StartJobRequest {
    pub fn new(task_name: impl Into<String>, task_type: &TaskType) -> Self {
        Self {
            kind: "job",
            task_name: task_name.into(),
            task_type: task_type.clone(),
        }
    }
}

/// Fields of a successful job-start response the client uses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartJobResponse {
    pub task_id: String,
    pub run_id: u64,
    pub task_name: String,
}

impl From<StartJobResponse> for JobRun {
    fn from(response: StartJobResponse) -> Self {
        JobRun {
            task_id: response.task_id,
            run_id: response.run_id,
            task_name: response.task_name,
        }
    }
}
