//! # Interview Lifecycle
//!
//! Classification of an interview as upcoming, live, or completed. The
//! persisted status and the clock both feed into the result, with a strict
//! precedence rule: a terminal persisted status (`completed`, `succeeded`,
//! `failed`) always wins. Only an unset, `upcoming`, or `live` persisted
//! status lets the classification be derived from time.
//!
//! The time-derived rule is a window check against the scheduled start and
//! an end computed from the scheduled duration, defaulting to one hour when
//! no end time was recorded.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::interview::{Interview, InterviewStatus};

/// Window length assumed when an interview has no recorded end time.
pub fn default_duration() -> Duration {
    Duration::hours(1)
}

/// Time-derived classification of an interview. Never persisted; the only
/// write path back into storage is the explicit end-call status mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Upcoming,
    Live,
    Completed,
}

/// Classifies an interview at the instant `now`.
///
/// Durations are taken as given: a zero or negative duration produces an
/// empty live window, so anything at or after the start classifies as
/// completed.
pub fn meeting_status_at(
    start_time: DateTime<Utc>,
    persisted: Option<InterviewStatus>,
    duration: Option<Duration>,
    now: DateTime<Utc>,
) -> MeetingStatus {
    // Terminal short-circuit: the persisted outcome wins over time.
    if persisted.is_some_and(|status| status.is_terminal()) {
        return MeetingStatus::Completed;
    }

    let end_time = start_time + duration.unwrap_or_else(default_duration);

    if now < start_time {
        MeetingStatus::Upcoming
    } else if now <= end_time {
        MeetingStatus::Live
    } else {
        MeetingStatus::Completed
    }
}

/// Classifies an interview against the current clock. The clock is
/// re-sampled on every invocation, never cached.
pub fn meeting_status(
    start_time: DateTime<Utc>,
    persisted: Option<InterviewStatus>,
    duration: Option<Duration>,
) -> MeetingStatus {
    meeting_status_at(start_time, persisted, duration, Utc::now())
}

impl Interview {
    pub fn meeting_status_at(&self, now: DateTime<Utc>) -> MeetingStatus {
        meeting_status_at(self.start_time, self.status, self.duration(), now)
    }

    pub fn meeting_status(&self) -> MeetingStatus {
        meeting_status(self.start_time, self.status, self.duration())
    }
}
