//! Core trait seams for talentline.
//!
//! Trait definitions live here so service crates can depend on the
//! interfaces without the concrete store plumbing, enabling pluggable
//! backends and testability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{JobOpeningSummary, ScheduleSummary, UpcomingInterviews};
use crate::query::{CollectionRef, PageToken, QueryPage, QueryRequest};

/// Minimal document-store capability this layer is built on.
///
/// The contract is deliberately small: execute one filtered query against a
/// named collection and return pages until the continuation runs out. The
/// store owns retry policy; this layer performs none. Cancellation is by
/// dropping the returned future.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Execute one page of a query.
    ///
    /// Returns `Ok(None)` when the named collection does not exist, which is
    /// distinct from an empty page of a known collection. Repeated calls with each
    /// returned continuation terminate with `continuation: None`.
    async fn execute_query(
        &self,
        collection: &CollectionRef,
        request: &QueryRequest,
        continuation: Option<&PageToken>,
    ) -> Result<Option<QueryPage>>;
}

/// Aggregation queries over the recruiting collections.
#[async_trait]
pub trait JobApplicationQuery: Send + Sync {
    /// Consolidated summaries of the caller's active openings.
    ///
    /// `Ok(None)` means the opening collection itself was absent; an empty
    /// vector means the store had no matching openings.
    async fn active_job_applications(
        &self,
        user_oid: &str,
    ) -> Result<Option<Vec<JobOpeningSummary>>>;

    /// Interview schedules for the given applications inside the configured
    /// window starting at `start_date` (now, when absent). Sorted ascending
    /// by start time; candidate names are left unresolved.
    async fn schedules_for_job_applications(
        &self,
        job_application_ids: &[String],
        start_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<ScheduleSummary>>;
}

/// Consolidated interview views served to the conversational surface.
#[async_trait]
pub trait JobApplicationManager: Send + Sync {
    /// Upcoming interviews for the caller, grouped per opening. Openings
    /// without a schedule in the window are omitted.
    async fn upcoming_interviews(
        &self,
        user_oid: &str,
        start_date_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<UpcomingInterviews>>;
}
