//! Terminal-state polling
//!
//! The one nontrivial piece of the client: query the activity feed at a
//! fixed interval until the entry matching a task/run pair leaves the
//! in-flight states, or a deadline passes.

use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::service::JobService;
use tug_core::domain::activity::ActivityEntry;
use tug_core::domain::session::Session;

/// Polling cadence
///
/// Both knobs are explicit configuration so tests can shrink them.
/// The interval is fixed — no backoff, no jitter — which suits a feed
/// queried a few times a minute at most.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between consecutive feed queries
    pub interval: Duration,
    /// Total time to wait for a terminal state
    pub timeout: Duration,
}

impl PollConfig {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.interval.is_zero() {
            anyhow::bail!("poll interval must be greater than 0");
        }

        if self.timeout < self.interval {
            anyhow::bail!("poll timeout must be at least one interval");
        }

        Ok(())
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(15),
            timeout: Duration::from_secs(30 * 60),
        }
    }
}

/// Wait until the run identified by `task_id` and `run_id` finishes
///
/// Sleeps one interval, queries the feed, and scans every entry for
/// the matching pair. A run not visible in the feed yet is not an
/// error; polling continues. The returned entry is the one observed at
/// the terminal check, so its `id` is the right key for the log fetch.
///
/// With interval `i` and timeout `t`, at most `ceil(t / i)` feed
/// queries are made.
///
/// # Errors
/// [`ClientError::ActivityQuery`] as soon as any feed query fails, and
/// [`ClientError::PollTimeout`] if the deadline passes while the run is
/// still in flight (or never became visible).
pub async fn poll_until_terminal<S: JobService + ?Sized>(
    service: &S,
    session: &Session,
    task_id: &str,
    run_id: u64,
    config: &PollConfig,
) -> Result<ActivityEntry> {
    let started = Instant::now();
    let deadline = started + config.timeout;

    loop {
        sleep(config.interval).await;

        let entries = service.activity_monitor(session).await?;

        match entries.into_iter().find(|e| e.matches(task_id, run_id)) {
            Some(entry) if !entry.state.is_in_flight() => {
                debug!(task_id, run_id, state = %entry.state, "run reached terminal state");
                return Ok(entry);
            }
            Some(entry) => {
                debug!(task_id, run_id, state = %entry.state, "run still in flight");
            }
            None => {
                debug!(task_id, run_id, "run not visible in activity feed yet");
            }
        }

        if Instant::now() >= deadline {
            return Err(ClientError::PollTimeout {
                task_id: task_id.to_string(),
                run_id,
                waited: started.elapsed(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{FeedStep, ScriptedService};
    use std::sync::atomic::Ordering;
    use tug_core::domain::job::ExecutionState;

    fn quick(polls: u32) -> PollConfig {
        PollConfig::new(Duration::from_millis(20), Duration::from_millis(20 * polls as u64))
    }

    #[tokio::test]
    async fn test_returns_matching_entry_once_terminal() {
        let service = ScriptedService::new(vec![
            FeedStep::Entries(vec![ScriptedService::entry(
                "T1",
                1,
                ExecutionState::Running,
            )]),
            FeedStep::Entries(vec![
                ScriptedService::entry("T9", 9, ExecutionState::Failed),
                ScriptedService::entry("T1", 1, ExecutionState::Success),
            ]),
        ]);
        let session = ScriptedService::session();

        let entry = poll_until_terminal(&service, &session, "T1", 1, &quick(50))
            .await
            .unwrap();

        assert_eq!(entry.id, "A-T1-1");
        assert_eq!(entry.state, ExecutionState::Success);
        assert_eq!(service.feed_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_never_returns_non_matching_terminal_entry() {
        // Another run's terminal entry must not satisfy the wait.
        let service = ScriptedService::new(vec![FeedStep::Entries(vec![
            ScriptedService::entry("T9", 9, ExecutionState::Success),
            ScriptedService::entry("T1", 1, ExecutionState::Queued),
        ])]);
        let session = ScriptedService::session();

        let err = poll_until_terminal(&service, &session, "T1", 1, &quick(3))
            .await
            .unwrap_err();

        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_invisible_run_keeps_polling() {
        let service = ScriptedService::new(vec![
            FeedStep::Entries(vec![]),
            FeedStep::Entries(vec![ScriptedService::entry(
                "T1",
                1,
                ExecutionState::Completed,
            )]),
        ]);
        let session = ScriptedService::session();

        let entry = poll_until_terminal(&service, &session, "T1", 1, &quick(50))
            .await
            .unwrap();

        assert_eq!(entry.state, ExecutionState::Completed);
        assert_eq!(service.feed_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_timeout_after_exact_poll_count() {
        // ceil(timeout / interval) queries, no more: 400ms / 200ms = 2.
        let service = ScriptedService::new(vec![FeedStep::Entries(vec![
            ScriptedService::entry("T1", 1, ExecutionState::Queued),
        ])]);
        let session = ScriptedService::session();
        let config = PollConfig::new(Duration::from_millis(200), Duration::from_millis(400));

        let err = poll_until_terminal(&service, &session, "T1", 1, &config)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::PollTimeout { ref task_id, run_id: 1, .. } if task_id == "T1"
        ));
        assert_eq!(service.feed_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_feed_failure_aborts_the_wait() {
        let service = ScriptedService::new(vec![FeedStep::Fail(500)]);
        let session = ScriptedService::session();

        let err = poll_until_terminal(&service, &session, "T1", 1, &quick(10))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ActivityQuery { .. }));
        assert_eq!(err.status(), Some(500));
        assert_eq!(service.feed_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_config_validation() {
        assert!(PollConfig::default().validate().is_ok());

        let config = PollConfig::new(Duration::ZERO, Duration::from_secs(30));
        assert!(config.validate().is_err());

        let config = PollConfig::new(Duration::from_secs(15), Duration::from_secs(5));
        assert!(config.validate().is_err());
    }
}
