//! Typed store predicates for the recruiting collections.
//!
//! Each constructor captures its parameters and evaluates against one
//! document kind; documents of other kinds in the same container never
//! match.

use talent_core::{
    JobApplication, JobApplicationSchedule, JobOpening, JobOpeningStatus, QueryFilter,
    ScheduleStatus, ScheduleWindow,
};

/// Active openings where `user_oid` participates with a role other than
/// Interviewer or AA.
pub fn active_openings_for_user(user_oid: &str) -> QueryFilter {
    let user_oid = user_oid.to_string();
    QueryFilter::typed::<JobOpening, _>(move |jo| {
        jo.status == JobOpeningStatus::Active && jo.has_qualifying_participant(&user_oid)
    })
}

/// Applications owned by the opening with the given external id.
///
/// Correlation is by the application's owning-opening reference, the only
/// key the two collections share.
pub fn applications_for_opening(external_job_opening_id: &str) -> QueryFilter {
    let external_job_opening_id = external_job_opening_id.to_string();
    QueryFilter::typed::<JobApplication, _>(move |ja| ja.belongs_to(&external_job_opening_id))
}

/// Non-deleted schedules for any of `job_application_ids` starting inside
/// `window`.
pub fn schedules_in_window(job_application_ids: &[String], window: ScheduleWindow) -> QueryFilter {
    let job_application_ids = job_application_ids.to_vec();
    QueryFilter::typed::<JobApplicationSchedule, _>(move |jas| {
        job_application_ids.contains(&jas.job_application_id)
            && jas.schedule_status != Some(ScheduleStatus::Delete)
            && window.contains(jas.start_date_time)
    })
}
