use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::directory::{UserDirectory, UserInfo};
use crate::errors::TalentError;
use crate::lifecycle::MeetingStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Option<InterviewStatus>,
    pub call_id: String,
    pub candidate_id: String,
    pub interviewer_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Interview {
    /// Scheduled duration, when an explicit end time was recorded.
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }
}

/// Persisted interview status. `Completed` is written when an interviewer
/// ends the call; `Succeeded`/`Failed` are grading refinements applied to
/// completed interviews from the dashboard. All three are terminal: once
/// set they win over any time-derived classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Upcoming,
    Live,
    Completed,
    Succeeded,
    Failed,
}

impl InterviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStatus::Upcoming => "upcoming",
            InterviewStatus::Live => "live",
            InterviewStatus::Completed => "completed",
            InterviewStatus::Succeeded => "succeeded",
            InterviewStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            InterviewStatus::Completed | InterviewStatus::Succeeded | InterviewStatus::Failed
        )
    }
}

impl std::str::FromStr for InterviewStatus {
    type Err = TalentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(InterviewStatus::Upcoming),
            "live" => Ok(InterviewStatus::Live),
            "completed" => Ok(InterviewStatus::Completed),
            "succeeded" => Ok(InterviewStatus::Succeeded),
            "failed" => Ok(InterviewStatus::Failed),
            other => Err(TalentError::Validation(format!(
                "Unknown interview status: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInterviewRequest {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Opaque video-call reference, generated by the scheduling client.
    pub call_id: String,
    pub candidate_id: String,
    pub interviewer_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInterviewStatusRequest {
    pub status: InterviewStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInterviewResponse {
    pub id: Uuid,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub call_id: String,
}

impl From<Interview> for CreateInterviewResponse {
    fn from(interview: Interview) -> Self {
        Self {
            id: interview.id,
            title: interview.title,
            start_time: interview.start_time,
            call_id: interview.call_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Option<InterviewStatus>,
    pub meeting_status: MeetingStatus,
    pub call_id: String,
    pub candidate: UserInfo,
    pub interviewers: Vec<UserInfo>,
}

impl InterviewResponse {
    /// Builds a response with participant display info resolved through the
    /// directory and the meeting status evaluated at `now`.
    pub fn resolve(interview: Interview, directory: &UserDirectory, now: DateTime<Utc>) -> Self {
        let meeting_status = interview.meeting_status_at(now);
        Self {
            id: interview.id,
            title: interview.title,
            description: interview.description,
            start_time: interview.start_time,
            end_time: interview.end_time,
            status: interview.status,
            meeting_status,
            call_id: interview.call_id,
            candidate: directory.candidate(&interview.candidate_id),
            interviewers: interview
                .interviewer_ids
                .iter()
                .map(|id| directory.interviewer(id))
                .collect(),
        }
    }
}
