//! Upcoming-interviews manager over the aggregation queries.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use talent_core::{
    normalize_start_date, Error, JobApplicationManager, JobApplicationQuery, JobOpeningSummary,
    Result, ScheduleSummary, UpcomingInterviews,
};

/// [`JobApplicationManager`] implementation that combines opening summaries
/// with schedule data.
pub struct StoreJobApplicationManager {
    query: Arc<dyn JobApplicationQuery>,
}

impl StoreJobApplicationManager {
    pub fn new(query: Arc<dyn JobApplicationQuery>) -> Self {
        Self { query }
    }

    /// Schedules belonging to one opening's applications, candidate names
    /// resolved from that opening's own application list.
    fn schedules_for_opening(
        opening: &JobOpeningSummary,
        schedules: &[ScheduleSummary],
    ) -> Vec<ScheduleSummary> {
        let application_ids: HashSet<&str> = opening.active_application_ids().collect();

        let mut summaries: Vec<ScheduleSummary> = schedules
            .iter()
            .filter(|jas| application_ids.contains(jas.job_application_id.as_str()))
            .cloned()
            .map(|mut jas| {
                jas.candidate_name = opening
                    .job_applications
                    .iter()
                    .find(|ja| ja.job_application_id == jas.job_application_id)
                    .and_then(|ja| ja.candidate.as_ref())
                    .and_then(|c| c.full_name.as_ref())
                    .and_then(|name| name.given_name.clone());
                jas
            })
            .collect();

        summaries.sort_by_key(|jas| jas.schedule_start_date_time);
        summaries
    }
}

#[async_trait]
impl JobApplicationManager for StoreJobApplicationManager {
    #[instrument(skip(self), fields(subsystem = "manager", op = "upcoming_interviews"))]
    async fn upcoming_interviews(
        &self,
        user_oid: &str,
        start_date_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<UpcomingInterviews>> {
        if user_oid.trim().is_empty() {
            return Err(Error::InvalidArgument("user OID is empty".to_string()));
        }
        let start = normalize_start_date(start_date_time);

        let Some(openings) = self.query.active_job_applications(user_oid).await? else {
            return Ok(Vec::new());
        };

        let job_application_ids: Vec<String> = openings
            .iter()
            .flat_map(|jo| jo.active_application_ids().map(str::to_string))
            .collect();

        let schedules = self
            .query
            .schedules_for_job_applications(&job_application_ids, Some(start))
            .await?;

        // Openings with nothing scheduled in the window are omitted
        let upcoming: Vec<UpcomingInterviews> = openings
            .iter()
            .filter_map(|jo| {
                let schedule_summaries = Self::schedules_for_opening(jo, &schedules);
                (!schedule_summaries.is_empty()).then(|| UpcomingInterviews {
                    external_job_opening_id: jo.external_job_opening_id.clone(),
                    position_title: jo.position_title.clone(),
                    schedule_summaries,
                })
            })
            .collect();

        info!(
            user_oid,
            opening_count = openings.len(),
            schedule_count = schedules.len(),
            upcoming_count = upcoming.len(),
            "Assembled upcoming interviews"
        );

        Ok(upcoming)
    }
}
