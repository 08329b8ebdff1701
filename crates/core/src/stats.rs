//! Aggregate dashboard statistics derived from grouped interviews.

use serde::{Deserialize, Serialize};

use crate::grouping::InterviewGroups;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub upcoming_count: usize,
    pub completed_count: usize,
    pub succeeded_count: usize,
    pub failed_count: usize,
    /// Share of completed interviews graded as succeeded, rounded half-up
    /// to the nearest whole percent. Zero when nothing has completed.
    pub success_rate_percent: u32,
}

/// Computes dashboard counters from grouped interviews. Pure; the guarded
/// division means there are no failure modes.
pub fn compute_stats(groups: &InterviewGroups) -> DashboardStats {
    let completed_count = groups.completed.len();
    let succeeded_count = groups.succeeded.len();

    let success_rate_percent = if completed_count > 0 {
        ((succeeded_count as f64 / completed_count as f64) * 100.0).round() as u32
    } else {
        0
    };

    DashboardStats {
        // The four date buckets partition the input, so their sizes sum to
        // the total number of interviews.
        total: groups.today.len() + groups.tomorrow.len() + groups.upcoming.len()
            + groups.past.len(),
        upcoming_count: groups.upcoming.len(),
        completed_count,
        succeeded_count,
        failed_count: groups.failed.len(),
        success_rate_percent,
    }
}
