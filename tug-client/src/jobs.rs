//! Job launch endpoint

use reqwest::header;
use tracing::info;

use crate::{IntegrationClient, SESSION_HEADER};
use crate::error::{ClientError, Result};
use tug_core::domain::job::JobRun;
use tug_core::domain::session::Session;
use tug_core::domain::task::TaskType;
use tug_core::dto::job::{StartJobRequest, StartJobResponse};

impl IntegrationClient {
    /// Ask the service to start one run of a named task
    ///
    /// This call has a real-world effect: on success a remote job is
    /// executing. It is **not idempotent** and is never retried here.
    /// A caller that wants retry-on-failure must first establish that
    /// the earlier attempt did not already start a run, or it will
    /// double-launch the job.
    ///
    /// The task type code is passed through unvalidated; the service
    /// rejects codes it does not know.
    pub async fn start_job(
        &self,
        session: &Session,
        task_name: &str,
        task_type: &TaskType,
    ) -> Result<JobRun> {
        let url = format!("{}/api/v2/job", session.server_url.trim_end_matches('/'));

        let launch_error = |source| ClientError::Launch {
            task_name: task_name.to_string(),
            source,
        };

        let response = self
            .http
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .header(SESSION_HEADER, &session.session_id)
            .json(&StartJobRequest::new(task_name, task_type))
            .send()
            .await
            .map_err(|e| launch_error(e.into()))?;

        let body: StartJobResponse = Self::read_json(response).await.map_err(launch_error)?;

        info!(
            task_name = %body.task_name,
            task_id = %body.task_id,
            run_id = body.run_id,
            "job started"
        );

        Ok(body.into())
    }
}
