use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use talentsync_core::models::code_session::{CodeSession, Language};
use talentsync_core::models::comment::Comment;
use talentsync_core::models::interview::Interview;
use talentsync_core::models::user::{User, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub clerk_id: String,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbInterview {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: String,
    pub call_id: String,
    pub candidate_id: String,
    pub interviewer_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbComment {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub interviewer_id: String,
    pub content: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCodeSession {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub code: String,
    pub language: String,
    pub question_id: String,
    pub created_at: DateTime<Utc>,
}

// Status, role, and language are stored as plain strings; parsing happens
// here at the read boundary. Unrecognized values degrade to defaults
// instead of failing the whole fetch.

impl From<DbUser> for User {
    fn from(user: DbUser) -> Self {
        Self {
            id: user.id,
            clerk_id: user.clerk_id,
            name: user.name,
            email: user.email,
            image: user.image,
            role: user.role.parse().unwrap_or(UserRole::Candidate),
            created_at: user.created_at,
        }
    }
}

impl From<DbInterview> for Interview {
    fn from(interview: DbInterview) -> Self {
        Self {
            id: interview.id,
            title: interview.title,
            description: interview.description,
            start_time: interview.start_time,
            end_time: interview.end_time,
            status: interview.status.parse().ok(),
            call_id: interview.call_id,
            candidate_id: interview.candidate_id,
            interviewer_ids: interview.interviewer_ids,
            created_at: interview.created_at,
        }
    }
}

impl From<DbComment> for Comment {
    fn from(comment: DbComment) -> Self {
        Self {
            id: comment.id,
            interview_id: comment.interview_id,
            interviewer_id: comment.interviewer_id,
            content: comment.content,
            rating: comment.rating,
            created_at: comment.created_at,
        }
    }
}

impl From<DbCodeSession> for CodeSession {
    fn from(session: DbCodeSession) -> Self {
        Self {
            id: session.id,
            interview_id: session.interview_id,
            code: session.code,
            language: session.language.parse().unwrap_or(Language::Javascript),
            question_id: session.question_id,
        }
    }
}
