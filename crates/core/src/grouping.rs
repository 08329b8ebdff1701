//! # Interview Grouping
//!
//! Partitions a collection of interviews into the named buckets the
//! dashboards render. Along the date axis every interview lands in exactly
//! one of `today`, `tomorrow`, `upcoming`, or `past`; `completed`,
//! `succeeded`, and `failed` are cross-cutting tags layered on top of
//! `past`.
//!
//! Calendar-date comparison happens in the timezone of the reference
//! instant supplied by the caller, so grouping is deterministic across
//! environments instead of depending on an ambient process locale.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::lifecycle::MeetingStatus;
use crate::models::interview::{Interview, InterviewStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewGroups {
    pub today: Vec<Interview>,
    pub tomorrow: Vec<Interview>,
    pub upcoming: Vec<Interview>,
    pub past: Vec<Interview>,
    pub completed: Vec<Interview>,
    pub succeeded: Vec<Interview>,
    pub failed: Vec<Interview>,
}

/// Groups interviews relative to the instant `now`, bucketing calendar
/// dates in `now`'s timezone. Single pass; input order is preserved within
/// each bucket.
pub fn group_interviews_at<Tz: TimeZone>(
    interviews: &[Interview],
    now: &DateTime<Tz>,
) -> InterviewGroups {
    let timezone = now.timezone();
    let today = now.date_naive();
    let tomorrow = today.succ_opt();
    let instant = now.with_timezone(&Utc);

    let mut groups = InterviewGroups::default();

    for interview in interviews {
        match interview.meeting_status_at(instant) {
            MeetingStatus::Completed => {
                groups.past.push(interview.clone());
                groups.completed.push(interview.clone());
                match interview.status {
                    Some(InterviewStatus::Succeeded) => groups.succeeded.push(interview.clone()),
                    Some(InterviewStatus::Failed) => groups.failed.push(interview.clone()),
                    // Ended but not yet graded: completed without an outcome tag.
                    _ => {}
                }
            }
            MeetingStatus::Upcoming | MeetingStatus::Live => {
                let date = interview.start_time.with_timezone(&timezone).date_naive();
                if date == today {
                    groups.today.push(interview.clone());
                } else if Some(date) == tomorrow {
                    groups.tomorrow.push(interview.clone());
                } else {
                    groups.upcoming.push(interview.clone());
                }
            }
        }
    }

    groups
}

/// Groups interviews against the current clock, using UTC calendar dates.
pub fn group_interviews(interviews: &[Interview]) -> InterviewGroups {
    group_interviews_at(interviews, &Utc::now())
}
