//! Trigger-and-wait composition
//!
//! One executor invocation is a single linear unit of work:
//! authenticate, start the job, poll until terminal, fetch the log.

use tracing::{info, warn};

use crate::error::Result;
use crate::poll::{PollConfig, poll_until_terminal};
use crate::service::JobService;
use tug_core::domain::session::Credential;
use tug_core::domain::task::TaskType;

/// Runs one named task to completion and returns its session log
///
/// Invocations share no mutable state: every [`execute`] call obtains
/// its own session, so any number of calls — on one executor or many —
/// may run concurrently without coordination.
///
/// [`execute`]: TaskExecutor::execute
pub struct TaskExecutor<S> {
    service: S,
    credential: Credential,
    task_type: TaskType,
    poll: PollConfig,
}

impl<S: JobService> TaskExecutor<S> {
    /// Create an executor for one credential and task type
    pub fn new(service: S, credential: Credential, task_type: TaskType, poll: PollConfig) -> Self {
        Self {
            service,
            credential,
            task_type,
            poll,
        }
    }

    /// Execute a named task and return its execution log
    ///
    /// Steps, in order: login, start the job, poll the activity feed
    /// until the run is terminal, fetch the session log with the
    /// terminal entry's id. The first failing step aborts the
    /// invocation and its error is returned as-is.
    ///
    /// There is no compensation after a successful launch: if polling
    /// fails or times out, the remote run keeps executing untracked.
    pub async fn execute(&self, task_name: &str) -> Result<String> {
        let session = self.service.login(&self.credential).await?;

        let run = self
            .service
            .start_job(&session, task_name, &self.task_type)
            .await?;

        let entry = poll_until_terminal(
            &self.service,
            &session,
            &run.task_id,
            run.run_id,
            &self.poll,
        )
        .await
        .inspect_err(|e| {
            if e.is_timeout() {
                warn!(
                    task_name,
                    task_id = %run.task_id,
                    run_id = run.run_id,
                    "giving up on run; it may still be executing remotely"
                );
            }
        })?;

        info!(task_name, state = %entry.state, "run finished, fetching session log");

        self.service.session_log(&session, &entry.id).await
    }
}
