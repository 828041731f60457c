//! Store document entities for the recruiting collections.
//!
//! Field names mirror the member names the upstream talent system writes to
//! the document store (`ExternalJobOpeningID`, `OID`, ...), so these types
//! decode documents produced by that system without a mapping layer. Enums
//! are stored as camelCase strings.
//!
//! Identity and status fields that every well-formed document carries are
//! required; everything else is optional. Collections hold several document
//! kinds side by side, and the required fields are what keeps a typed
//! predicate from matching a document of another kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// ENUMS
// =============================================================================

/// Lifecycle status of a job opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobOpeningStatus {
    Active,
    Closed,
}

/// Reason backing a job opening's lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobOpeningStatusReason {
    New,
    Filled,
    Cancelled,
    Suspended,
}

/// Role a participant holds on an opening or application.
///
/// `AA` is the anonymized-reviewer role; its wire spelling is the literal
/// `"AA"` rather than a camelCase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobParticipantRole {
    HiringManager,
    Recruiter,
    Contributor,
    Interviewer,
    #[serde(rename = "AA")]
    AA,
}

/// Lifecycle status of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobApplicationStatus {
    Active,
    Offered,
    Closed,
}

/// Pipeline stage an application currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobStage {
    Application,
    Screening,
    Interview,
    Assessment,
    Offer,
    Dispositioned,
}

/// Lifecycle status of an interview schedule record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleStatus {
    NotScheduled,
    Saved,
    Queued,
    Sent,
    Delete,
}

/// A schedule participant's response to the interview invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvitationResponseStatus {
    None,
    Accepted,
    TentativelyAccepted,
    Declined,
    Pending,
}

// =============================================================================
// JOB OPENING
// =============================================================================

/// A job requisition with a lifecycle and a set of participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobOpening {
    #[serde(rename = "ExternalJobOpeningID")]
    pub external_job_opening_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_title: Option<String>,
    pub status: JobOpeningStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<JobOpeningStatusReason>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub job_opening_participants: Vec<JobOpeningParticipant>,
}

/// A worker attached to a job opening with a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobOpeningParticipant {
    #[serde(
        rename = "JobOpeningParticipantID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub job_opening_participant_id: Option<String>,
    #[serde(rename = "OID", default, skip_serializing_if = "Option::is_none")]
    pub oid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<JobParticipantRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_on_date: Option<DateTime<Utc>>,
}

// =============================================================================
// JOB APPLICATION
// =============================================================================

/// A candidate's application against one opening.
///
/// `job_opening` is the denormalized back-reference to the owning opening;
/// it is the correlation key for every opening/application join in this
/// system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobApplication {
    #[serde(rename = "JobApplicationID")]
    pub job_application_id: String,
    #[serde(
        rename = "ExternalJobApplicationID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external_job_application_id: Option<String>,
    pub job_opening: JobOpeningRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobApplicationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_job_opening_stage: Option<JobStage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Candidate>,
}

/// Slim reference to the opening an application belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobOpeningRef {
    #[serde(rename = "ExternalJobOpeningID")]
    pub external_job_opening_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_title: Option<String>,
}

/// Candidate contact information carried on an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<PersonName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_primary: Option<String>,
}

/// Name parts as stored on the candidate record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
}

// =============================================================================
// INTERVIEW SCHEDULE
// =============================================================================

/// An interview schedule record for one application.
///
/// Schedule records carry no candidate display name; callers resolve one by
/// cross-referencing the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobApplicationSchedule {
    #[serde(rename = "JobApplicationID")]
    pub job_application_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_status: Option<ScheduleStatus>,
    pub start_date_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<JobApplicationScheduleParticipant>,
}

/// An interviewer (or other worker) attached to a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobApplicationScheduleParticipant {
    #[serde(rename = "OID", default, skip_serializing_if = "Option::is_none")]
    pub oid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<JobParticipantRole>,
    #[serde(
        rename = "ParticipantResponseStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub participant_status: Option<InvitationResponseStatus>,
    #[serde(
        rename = "ParticipantResponseComments",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub participant_comments: Option<String>,
    #[serde(default)]
    pub is_assessment_completed: bool,
}

impl JobOpening {
    /// Whether `oid` participates on this opening with a role other than
    /// Interviewer or AA. A participant whose role is unset still qualifies.
    pub fn has_qualifying_participant(&self, oid: &str) -> bool {
        self.job_opening_participants.iter().any(|p| {
            p.oid.as_deref() == Some(oid)
                && !matches!(
                    p.role,
                    Some(JobParticipantRole::Interviewer) | Some(JobParticipantRole::AA)
                )
        })
    }
}

impl JobApplication {
    /// Whether this application belongs to the opening with the given id.
    pub fn belongs_to(&self, external_job_opening_id: &str) -> bool {
        self.job_opening.external_job_opening_id == external_job_opening_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_opening_decodes_store_member_names() {
        let doc = json!({
            "ExternalJobOpeningID": "JO-1001",
            "PositionTitle": "Senior Engineer",
            "Status": "active",
            "StatusReason": "new",
            "JobOpeningParticipants": [
                { "OID": "u1", "Role": "hiringManager" },
                { "OID": "u2", "Role": "AA" }
            ]
        });

        let opening: JobOpening = serde_json::from_value(doc).unwrap();
        assert_eq!(opening.external_job_opening_id, "JO-1001");
        assert_eq!(opening.status, JobOpeningStatus::Active);
        assert_eq!(opening.job_opening_participants.len(), 2);
        assert_eq!(
            opening.job_opening_participants[1].role,
            Some(JobParticipantRole::AA)
        );
    }

    #[test]
    fn test_job_application_decodes_embedded_opening_ref() {
        let doc = json!({
            "JobApplicationID": "JA-1",
            "JobOpening": { "ExternalJobOpeningID": "JO-1001" },
            "Status": "active",
            "CurrentJobOpeningStage": "screening",
            "Candidate": {
                "FullName": { "GivenName": "Ada", "Surname": "Lovelace" },
                "EmailPrimary": "ada@example.com"
            }
        });

        let application: JobApplication = serde_json::from_value(doc).unwrap();
        assert!(application.belongs_to("JO-1001"));
        assert_eq!(
            application.current_job_opening_stage,
            Some(JobStage::Screening)
        );
        let name = application.candidate.unwrap().full_name.unwrap();
        assert_eq!(name.given_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_opening_document_does_not_decode_as_application() {
        let doc = json!({
            "ExternalJobOpeningID": "JO-1001",
            "Status": "active"
        });

        assert!(serde_json::from_value::<JobApplication>(doc).is_err());
    }

    #[test]
    fn test_qualifying_participant_rules() {
        let opening = JobOpening {
            external_job_opening_id: "JO-1".to_string(),
            position_title: None,
            status: JobOpeningStatus::Active,
            status_reason: None,
            job_opening_participants: vec![
                JobOpeningParticipant {
                    job_opening_participant_id: None,
                    oid: Some("hm".to_string()),
                    role: Some(JobParticipantRole::HiringManager),
                    added_on_date: None,
                },
                JobOpeningParticipant {
                    job_opening_participant_id: None,
                    oid: Some("iv".to_string()),
                    role: Some(JobParticipantRole::Interviewer),
                    added_on_date: None,
                },
                JobOpeningParticipant {
                    job_opening_participant_id: None,
                    oid: Some("nr".to_string()),
                    role: None,
                    added_on_date: None,
                },
            ],
        };

        assert!(opening.has_qualifying_participant("hm"));
        assert!(!opening.has_qualifying_participant("iv"));
        // Unset role qualifies
        assert!(opening.has_qualifying_participant("nr"));
        assert!(!opening.has_qualifying_participant("unknown"));
    }

    #[test]
    fn test_schedule_decodes_participants() {
        let doc = json!({
            "JobApplicationID": "JA-1",
            "ScheduleStatus": "sent",
            "StartDateTime": "2026-03-02T09:00:00Z",
            "Participants": [{
                "OID": "iv-1",
                "Role": "interviewer",
                "ParticipantResponseStatus": "tentativelyAccepted",
                "IsAssessmentCompleted": true
            }]
        });

        let schedule: JobApplicationSchedule = serde_json::from_value(doc).unwrap();
        assert_eq!(schedule.schedule_status, Some(ScheduleStatus::Sent));
        assert_eq!(schedule.participants.len(), 1);
        assert_eq!(
            schedule.participants[0].participant_status,
            Some(InvitationResponseStatus::TentativelyAccepted)
        );
        assert!(schedule.participants[0].is_assessment_completed);
    }

    #[test]
    fn test_schedule_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ScheduleStatus::Delete).unwrap(),
            "\"delete\""
        );
        assert_eq!(
            serde_json::from_str::<ScheduleStatus>("\"notScheduled\"").unwrap(),
            ScheduleStatus::NotScheduled
        );
    }
}
