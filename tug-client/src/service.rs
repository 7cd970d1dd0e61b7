//! Remote service seam
//!
//! The poller and executor talk to the remote API through this trait
//! rather than [`IntegrationClient`] directly, so their logic can be
//! exercised against scripted implementations.

use async_trait::async_trait;

use crate::IntegrationClient;
use crate::error::Result;
use tug_core::domain::activity::ActivityEntry;
use tug_core::domain::job::JobRun;
use tug_core::domain::session::{Credential, Session};
use tug_core::domain::task::TaskType;

/// The four operations the remote service offers
#[async_trait]
pub trait JobService: Send + Sync {
    /// Exchange a credential pair for a session
    async fn login(&self, credential: &Credential) -> Result<Session>;

    /// Start one run of a named task
    ///
    /// Not idempotent; implementations must not retry internally.
    async fn start_job(
        &self,
        session: &Session,
        task_name: &str,
        task_type: &TaskType,
    ) -> Result<JobRun>;

    /// Fetch the current activity monitor feed
    async fn activity_monitor(&self, session: &Session) -> Result<Vec<ActivityEntry>>;

    /// Fetch the execution log for a terminal activity entry
    async fn session_log(&self, session: &Session, entry_id: &str) -> Result<String>;
}

#[async_trait]
impl JobService for IntegrationClient {
    async fn login(&self, credential: &Credential) -> Result<Session> {
        IntegrationClient::login(self, credential).await
    }

    async fn start_job(
        &self,
        session: &Session,
        task_name: &str,
        task_type: &TaskType,
    ) -> Result<JobRun> {
        IntegrationClient::start_job(self, session, task_name, task_type).await
    }

    async fn activity_monitor(&self, session: &Session) -> Result<Vec<ActivityEntry>> {
        IntegrationClient::activity_monitor(self, session).await
    }

    async fn session_log(&self, session: &Session, entry_id: &str) -> Result<String> {
        IntegrationClient::session_log(self, session, entry_id).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted stand-in for the remote service, shared by the poller
    //! and executor tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::{ApiFailure, ClientError};
    use tug_core::domain::job::ExecutionState;

    /// One scripted activity-feed response
    #[derive(Debug, Clone)]
    pub enum FeedStep {
        /// Respond with these entries
        Entries(Vec<ActivityEntry>),
        /// Fail the query with this HTTP status
        Fail(u16),
    }

    /// A [`JobService`] that replays a script and counts calls
    ///
    /// Feed steps play in order; the last step repeats forever so a
    /// test can model "stays QUEUED" without scripting every poll.
    pub struct ScriptedService {
        pub login_failure: Option<u16>,
        pub launch_failure: Option<u16>,
        pub run: JobRun,
        pub log_text: String,
        feed: Mutex<VecDeque<FeedStep>>,
        pub login_calls: AtomicUsize,
        pub launch_calls: AtomicUsize,
        pub feed_calls: AtomicUsize,
        pub log_requests: Mutex<Vec<String>>,
    }

    impl ScriptedService {
        pub fn new(feed: Vec<FeedStep>) -> Self {
            Self {
                login_failure: None,
                launch_failure: None,
                run: JobRun {
                    task_id: "T1".to_string(),
                    run_id: 1,
                    task_name: "Task_Date_Dim".to_string(),
                },
                log_text: "job ok".to_string(),
                feed: Mutex::new(feed.into()),
                login_calls: AtomicUsize::new(0),
                launch_calls: AtomicUsize::new(0),
                feed_calls: AtomicUsize::new(0),
                log_requests: Mutex::new(Vec::new()),
            }
        }

        pub fn session() -> Session {
            Session::new("S1", "https://x")
        }

        pub fn entry(task_id: &str, run_id: u64, state: ExecutionState) -> ActivityEntry {
            ActivityEntry {
                id: format!("A-{task_id}-{run_id}"),
                task_id: task_id.to_string(),
                run_id,
                task_name: "Task_Date_Dim".to_string(),
                state,
                start_time: None,
                end_time: None,
            }
        }
    }

    #[async_trait]
    impl JobService for ScriptedService {
        async fn login(&self, _credential: &Credential) -> Result<Session> {
            self.login_calls.fetch_add(1, Ordering::SeqCst);
            match self.login_failure {
                Some(status) => Err(ClientError::Auth {
                    source: ApiFailure::status(status, "scripted login failure"),
                }),
                None => Ok(Self::session()),
            }
        }

        async fn start_job(
            &self,
            _session: &Session,
            task_name: &str,
            _task_type: &TaskType,
        ) -> Result<JobRun> {
            self.launch_calls.fetch_add(1, Ordering::SeqCst);
            match self.launch_failure {
                Some(status) => Err(ClientError::Launch {
                    task_name: task_name.to_string(),
                    source: ApiFailure::status(status, "scripted launch failure"),
                }),
                None => Ok(self.run.clone()),
            }
        }

        async fn activity_monitor(&self, _session: &Session) -> Result<Vec<ActivityEntry>> {
            self.feed_calls.fetch_add(1, Ordering::SeqCst);

            let step = {
                let mut feed = self.feed.lock().unwrap();
                if feed.len() > 1 {
                    feed.pop_front().unwrap()
                } else {
                    feed.front().cloned().expect("feed script is empty")
                }
            };

            match step {
                FeedStep::Entries(entries) => Ok(entries),
                FeedStep::Fail(status) => Err(ClientError::ActivityQuery {
                    source: ApiFailure::status(status, "scripted feed failure"),
                }),
            }
        }

        async fn session_log(&self, _session: &Session, entry_id: &str) -> Result<String> {
            self.log_requests
                .lock()
                .unwrap()
                .push(entry_id.to_string());
            Ok(self.log_text.clone())
        }
    }
}
