//! Store-backed job application aggregation queries.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::task::JoinSet;
use tracing::{debug, info, instrument};

use talent_core::{
    Error, JobApplication, JobApplicationQuery, JobApplicationSchedule, JobOpening,
    JobOpeningSummary, QueryConfig, Result, ScheduleSummary, ScheduleWindow,
};
use talent_store::{QueryClient, QueryClientProvider};

use crate::filters;

/// [`JobApplicationQuery`] implementation over the document-store query
/// layer.
pub struct StoreJobApplicationQuery {
    provider: Arc<QueryClientProvider>,
    config: QueryConfig,
}

impl StoreJobApplicationQuery {
    pub fn new(provider: Arc<QueryClientProvider>, config: QueryConfig) -> Self {
        Self { provider, config }
    }

    /// Fetch the applications of every opening, one bounded concurrent
    /// sub-fetch per opening, and merge them into one working set.
    ///
    /// Completion order is unconstrained; correlation back to openings
    /// happens later by key, never by position. The first sub-fetch error
    /// fails the whole batch: dropping the [`JoinSet`] aborts in-flight
    /// siblings, and nothing already merged survives the call.
    async fn fetch_applications_for(
        &self,
        client: &Arc<QueryClient>,
        openings: &[JobOpening],
    ) -> Result<Vec<JobApplication>> {
        let mut pending: VecDeque<String> = openings
            .iter()
            .map(|jo| jo.external_job_opening_id.clone())
            .collect();
        let take = self.config.application_fetch_limit;
        let cap = self.config.max_concurrent_fetches.max(1);

        let mut tasks = JoinSet::new();
        let mut merged = Vec::new();

        loop {
            while tasks.len() < cap {
                let Some(opening_id) = pending.pop_front() else {
                    break;
                };
                let client = Arc::clone(client);
                tasks.spawn(async move {
                    client
                        .fetch_window::<JobApplication>(
                            filters::applications_for_opening(&opening_id),
                            0,
                            take,
                        )
                        .await
                });
            }

            match tasks.join_next().await {
                Some(Ok(Ok(batch))) => merged.extend(batch.unwrap_or_default()),
                Some(Ok(Err(e))) => return Err(e),
                Some(Err(e)) => {
                    return Err(Error::Internal(format!(
                        "application fetch task failed: {e}"
                    )))
                }
                None => break,
            }
        }

        Ok(merged)
    }
}

#[async_trait]
impl JobApplicationQuery for StoreJobApplicationQuery {
    #[instrument(skip(self), fields(subsystem = "query", op = "active_job_applications"))]
    async fn active_job_applications(
        &self,
        user_oid: &str,
    ) -> Result<Option<Vec<JobOpeningSummary>>> {
        if user_oid.trim().is_empty() {
            return Err(Error::InvalidArgument("user OID is empty".to_string()));
        }

        let start = Instant::now();
        let client = self
            .provider
            .client(&self.config.database, &self.config.common_container)
            .await;

        let openings = client
            .fetch_window::<JobOpening>(
                filters::active_openings_for_user(user_oid),
                0,
                self.config.opening_fetch_limit,
            )
            .await?;

        let Some(openings) = openings else {
            debug!(user_oid, "Opening collection absent");
            return Ok(None);
        };

        if openings.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let applications = self.fetch_applications_for(&client, &openings).await?;

        // One summary per opening, in opening-fetch order
        let summaries: Vec<JobOpeningSummary> = openings
            .iter()
            .map(|jo| JobOpeningSummary::assemble(jo, &applications))
            .collect();

        info!(
            user_oid,
            opening_count = summaries.len(),
            application_count = applications.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Assembled job opening summaries"
        );

        Ok(Some(summaries))
    }

    #[instrument(
        skip(self, job_application_ids),
        fields(
            subsystem = "query",
            op = "schedules_for_job_applications",
            id_count = job_application_ids.len(),
        )
    )]
    async fn schedules_for_job_applications(
        &self,
        job_application_ids: &[String],
        start_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<ScheduleSummary>> {
        let window = ScheduleWindow::starting(start_date, self.config.schedule_window_days)?;

        if job_application_ids.is_empty() {
            return Ok(Vec::new());
        }

        let client = self
            .provider
            .client(&self.config.database, &self.config.schedule_container)
            .await;

        let mut schedules = client
            .fetch::<JobApplicationSchedule>(filters::schedules_in_window(
                job_application_ids,
                window,
            ))
            .await?
            .unwrap_or_default();

        schedules.sort_by_key(|jas| jas.start_date_time);

        debug!(
            result_count = schedules.len(),
            window_start = %window.start,
            window_end = %window.end,
            "Fetched schedules"
        );

        Ok(schedules
            .into_iter()
            .map(|jas| ScheduleSummary {
                job_application_id: jas.job_application_id,
                candidate_name: None,
                schedule_start_date_time: jas.start_date_time,
            })
            .collect())
    }
}
