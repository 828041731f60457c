//! Derived view models assembled from store entities.
//!
//! These are request-scoped aggregates: built once per call, handed to the
//! caller, never persisted and never cached across requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{
    JobApplication, JobApplicationStatus, JobOpening, JobOpeningStatus, JobOpeningStatusReason,
    JobStage,
};

/// Consolidated per-opening view of its applications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobOpeningSummary {
    #[serde(rename = "ExternalJobOpeningID")]
    pub external_job_opening_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_title: Option<String>,
    pub job_opening_status: JobOpeningStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_opening_status_reason: Option<JobOpeningStatusReason>,
    /// Applications currently active against this opening.
    pub job_applications: Vec<JobApplication>,
    /// Applications sitting in the Screening stage, awaiting review.
    pub review_applications: Vec<JobApplication>,
    pub total_applications: usize,
    pub dispositioned_applications: usize,
    pub interview_applications: usize,
    pub assessment_applications: usize,
}

impl JobOpeningSummary {
    /// Build the summary for `opening` out of a merged application working
    /// set. Only applications whose owning-opening id matches are
    /// considered, so the working set may span several openings.
    ///
    /// Lists and counts are derived from the same filtered snapshot in one
    /// pass over the input; callers never observe a summary whose counts
    /// disagree with its lists.
    pub fn assemble(opening: &JobOpening, applications: &[JobApplication]) -> Self {
        let for_opening: Vec<&JobApplication> = applications
            .iter()
            .filter(|ja| ja.belongs_to(&opening.external_job_opening_id))
            .collect();

        let in_stage = |stage: JobStage| {
            for_opening
                .iter()
                .filter(|ja| ja.current_job_opening_stage == Some(stage))
                .count()
        };

        Self {
            external_job_opening_id: opening.external_job_opening_id.clone(),
            position_title: opening.position_title.clone(),
            job_opening_status: opening.status,
            job_opening_status_reason: opening.status_reason,
            job_applications: for_opening
                .iter()
                .filter(|ja| ja.status == Some(JobApplicationStatus::Active))
                .map(|ja| (*ja).clone())
                .collect(),
            review_applications: for_opening
                .iter()
                .filter(|ja| ja.current_job_opening_stage == Some(JobStage::Screening))
                .map(|ja| (*ja).clone())
                .collect(),
            total_applications: for_opening.len(),
            dispositioned_applications: in_stage(JobStage::Dispositioned),
            interview_applications: in_stage(JobStage::Interview),
            assessment_applications: in_stage(JobStage::Assessment),
        }
    }

    /// Ids of the active applications carried by this summary.
    pub fn active_application_ids(&self) -> impl Iterator<Item = &str> {
        self.job_applications
            .iter()
            .map(|ja| ja.job_application_id.as_str())
    }
}

/// One upcoming interview slot for an application.
///
/// `candidate_name` is resolved by the manager from the owning application;
/// schedule records themselves carry no display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleSummary {
    pub job_application_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    pub schedule_start_date_time: DateTime<Utc>,
}

/// Upcoming interviews grouped under one opening.
///
/// Only constructed for openings with at least one schedule in the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpcomingInterviews {
    pub external_job_opening_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_title: Option<String>,
    /// Ordered ascending by start time.
    pub schedule_summaries: Vec<ScheduleSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::JobOpeningRef;

    fn opening(id: &str) -> JobOpening {
        JobOpening {
            external_job_opening_id: id.to_string(),
            position_title: Some("Engineer".to_string()),
            status: JobOpeningStatus::Active,
            status_reason: None,
            job_opening_participants: Vec::new(),
        }
    }

    fn application(
        id: &str,
        opening_id: &str,
        status: JobApplicationStatus,
        stage: JobStage,
    ) -> JobApplication {
        JobApplication {
            job_application_id: id.to_string(),
            external_job_application_id: None,
            job_opening: JobOpeningRef {
                external_job_opening_id: opening_id.to_string(),
                position_title: None,
            },
            status: Some(status),
            current_job_opening_stage: Some(stage),
            candidate: None,
        }
    }

    #[test]
    fn test_assemble_counts_match_lists() {
        let o = opening("JO-1");
        let apps = vec![
            application("JA-1", "JO-1", JobApplicationStatus::Active, JobStage::Screening),
            application("JA-2", "JO-1", JobApplicationStatus::Active, JobStage::Interview),
            application("JA-3", "JO-1", JobApplicationStatus::Closed, JobStage::Dispositioned),
        ];

        let summary = JobOpeningSummary::assemble(&o, &apps);

        assert_eq!(summary.total_applications, 3);
        assert_eq!(summary.job_applications.len(), 2); // active only
        assert_eq!(summary.review_applications.len(), 1);
        assert_eq!(summary.review_applications[0].job_application_id, "JA-1");
        assert_eq!(summary.interview_applications, 1);
        assert_eq!(summary.dispositioned_applications, 1);
        assert_eq!(summary.assessment_applications, 0);
    }

    #[test]
    fn test_assemble_ignores_other_openings() {
        let o = opening("JO-1");
        let apps = vec![
            application("JA-1", "JO-1", JobApplicationStatus::Active, JobStage::Screening),
            application("JA-9", "JO-2", JobApplicationStatus::Active, JobStage::Interview),
        ];

        let summary = JobOpeningSummary::assemble(&o, &apps);

        assert_eq!(summary.total_applications, 1);
        assert_eq!(summary.interview_applications, 0);
        assert_eq!(
            summary.active_application_ids().collect::<Vec<_>>(),
            vec!["JA-1"]
        );
    }

    #[test]
    fn test_assemble_empty_working_set() {
        let summary = JobOpeningSummary::assemble(&opening("JO-1"), &[]);
        assert_eq!(summary.total_applications, 0);
        assert!(summary.job_applications.is_empty());
        assert!(summary.review_applications.is_empty());
    }
}
