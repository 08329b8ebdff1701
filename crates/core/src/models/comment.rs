use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Accepted rating values for interviewer feedback.
pub const RATING_RANGE: RangeInclusive<i32> = 1..=5;

/// Interviewer feedback on an interview. Append-only: no update or delete
/// operation exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub interviewer_id: String,
    pub content: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub interviewer_id: String,
    pub content: String,
    pub rating: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub interviewer_id: String,
    pub content: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            interviewer_id: comment.interviewer_id,
            content: comment.content,
            rating: comment.rating,
            created_at: comment.created_at,
        }
    }
}
