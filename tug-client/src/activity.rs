//! Activity feed and session log endpoints

use crate::IntegrationClient;
use crate::error::{ClientError, Result};
use tug_core::domain::activity::ActivityEntry;
use tug_core::domain::session::Session;

impl IntegrationClient {
    /// Fetch the current activity monitor feed
    ///
    /// Returns every run the service is currently tracking. Callers
    /// wanting a particular run must match on its task_id/run_id pair;
    /// the feed's ordering carries no meaning.
    pub async fn activity_monitor(&self, session: &Session) -> Result<Vec<ActivityEntry>> {
        let response = self
            .session_get(session, "/api/v2/activity/activityMonitor")
            .send()
            .await
            .map_err(|e| ClientError::ActivityQuery { source: e.into() })?;

        Self::read_json(response)
            .await
            .map_err(|source| ClientError::ActivityQuery { source })
    }

    /// Fetch the execution log for a finished run
    ///
    /// Takes the activity entry id captured when the run was observed
    /// terminal. Re-querying the feed to rediscover the id would race
    /// against the entry rotating out, so don't — pass the one the
    /// poller returned.
    pub async fn session_log(&self, session: &Session, entry_id: &str) -> Result<String> {
        let path = format!("/api/v2/activity/activityLog/{entry_id}/sessionLog");

        let fetch_error = |source| ClientError::LogFetch {
            entry_id: entry_id.to_string(),
            source,
        };

        let response = self
            .session_get(session, &path)
            .send()
            .await
            .map_err(|e| fetch_error(e.into()))?;

        Self::read_text(response).await.map_err(fetch_error)
    }
}
