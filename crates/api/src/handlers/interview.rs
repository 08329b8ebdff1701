//! # Interview Handlers
//!
//! Scheduling, lookup, and status mutation of interviews, plus the derived
//! dashboard views. The dashboard handlers are the composition point for
//! the core engine: fetched rows are converted to domain interviews, run
//! through the grouper, and the groups feed the stats aggregator. Display
//! information for participants is resolved through a `UserDirectory`
//! built once per request from the user table.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use talentsync_core::{
    directory::UserDirectory,
    errors::TalentError,
    grouping::{InterviewGroups, group_interviews_at},
    models::interview::{
        CreateInterviewRequest, CreateInterviewResponse, Interview, InterviewResponse,
        UpdateInterviewStatusRequest,
    },
    models::user::{User, UserRole},
    stats::{DashboardStats, compute_stats},
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct ListInterviewsQuery {
    /// Restrict the listing to one candidate's interviews.
    pub candidate_id: Option<String>,
}

/// Dashboard payload: aggregate interview stats plus participant
/// headcounts.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub candidate_count: usize,
    pub interviewer_count: usize,
}

/// Schedules an interview.
///
/// Missing selections are rejected before any remote call is issued, so a
/// doomed mutation never reaches the persistence layer. The call reference
/// is generated by the scheduling client and stored opaquely.
#[axum::debug_handler]
pub async fn create_interview(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateInterviewRequest>,
) -> Result<Json<CreateInterviewResponse>, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError(TalentError::Validation(
            "Interview title must not be empty".to_string(),
        )));
    }
    if payload.candidate_id.is_empty() {
        return Err(AppError(TalentError::Validation(
            "A candidate must be selected".to_string(),
        )));
    }
    if payload.interviewer_ids.is_empty() {
        return Err(AppError(TalentError::Validation(
            "At least one interviewer must be selected".to_string(),
        )));
    }
    if payload.call_id.is_empty() {
        return Err(AppError(TalentError::Validation(
            "A call reference is required".to_string(),
        )));
    }

    let db_interview =
        talentsync_db::repositories::interview::create_interview(&state.db_pool, &payload)
            .await
            .map_err(TalentError::Database)?;

    Ok(Json(Interview::from(db_interview).into()))
}

#[axum::debug_handler]
pub async fn list_interviews(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListInterviewsQuery>,
) -> Result<Json<Vec<InterviewResponse>>, AppError> {
    let db_interviews = match &query.candidate_id {
        Some(candidate_id) => {
            talentsync_db::repositories::interview::get_interviews_by_candidate_id(
                &state.db_pool,
                candidate_id,
            )
            .await
            .map_err(TalentError::Database)?
        }
        None => talentsync_db::repositories::interview::get_all_interviews(&state.db_pool)
            .await
            .map_err(TalentError::Database)?,
    };

    let directory = load_directory(&state).await?;
    let now = Utc::now();

    let responses = db_interviews
        .into_iter()
        .map(|row| InterviewResponse::resolve(Interview::from(row), &directory, now))
        .collect();

    Ok(Json(responses))
}

#[axum::debug_handler]
pub async fn get_interview(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewResponse>, AppError> {
    let db_interview =
        talentsync_db::repositories::interview::get_interview_by_id(&state.db_pool, id)
            .await
            .map_err(TalentError::Database)?
            .ok_or_else(|| {
                TalentError::NotFound(format!("Interview with ID {} not found", id))
            })?;

    let directory = load_directory(&state).await?;

    Ok(Json(InterviewResponse::resolve(
        Interview::from(db_interview),
        &directory,
        Utc::now(),
    )))
}

/// Resolves an interview from its opaque video-call reference. Used when a
/// participant joins a call and only the call id is known.
#[axum::debug_handler]
pub async fn get_interview_by_call(
    State(state): State<Arc<ApiState>>,
    Path(call_id): Path<String>,
) -> Result<Json<InterviewResponse>, AppError> {
    let db_interview =
        talentsync_db::repositories::interview::get_interview_by_call_id(&state.db_pool, &call_id)
            .await
            .map_err(TalentError::Database)?
            .ok_or_else(|| {
                TalentError::NotFound(format!("Interview with call ID {} not found", call_id))
            })?;

    let directory = load_directory(&state).await?;

    Ok(Json(InterviewResponse::resolve(
        Interview::from(db_interview),
        &directory,
        Utc::now(),
    )))
}

/// Groups all interviews into the dashboard buckets, evaluated against the
/// current clock with UTC calendar dates.
#[axum::debug_handler]
pub async fn grouped_interviews(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<InterviewGroups>, AppError> {
    let interviews = fetch_all_interviews(&state).await?;
    let groups = group_interviews_at(&interviews, &Utc::now());

    Ok(Json(groups))
}

/// Computes the dashboard statistics, including candidate and interviewer
/// headcounts.
#[axum::debug_handler]
pub async fn dashboard(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<DashboardResponse>, AppError> {
    let interviews = fetch_all_interviews(&state).await?;
    let groups = group_interviews_at(&interviews, &Utc::now());
    let stats = compute_stats(&groups);

    let users: Vec<User> = talentsync_db::repositories::user::get_users(&state.db_pool)
        .await
        .map_err(TalentError::Database)?
        .into_iter()
        .map(User::from)
        .collect();

    let candidate_count = users
        .iter()
        .filter(|user| user.role == UserRole::Candidate)
        .count();
    let interviewer_count = users.len() - candidate_count;

    Ok(Json(DashboardResponse {
        stats,
        candidate_count,
        interviewer_count,
    }))
}

/// Persists an explicit status change: the interviewer ending the call
/// writes `completed`, a dashboard reviewer grades with `succeeded` or
/// `failed`.
#[axum::debug_handler]
pub async fn update_interview_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInterviewStatusRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    let db_interview = talentsync_db::repositories::interview::update_interview_status(
        &state.db_pool,
        id,
        payload.status,
    )
    .await
    .map_err(TalentError::Database)?
    .ok_or_else(|| TalentError::NotFound(format!("Interview with ID {} not found", id)))?;

    let directory = load_directory(&state).await?;

    Ok(Json(InterviewResponse::resolve(
        Interview::from(db_interview),
        &directory,
        Utc::now(),
    )))
}

async fn fetch_all_interviews(state: &ApiState) -> Result<Vec<Interview>, AppError> {
    let interviews = talentsync_db::repositories::interview::get_all_interviews(&state.db_pool)
        .await
        .map_err(TalentError::Database)?
        .into_iter()
        .map(Interview::from)
        .collect();

    Ok(interviews)
}

async fn load_directory(state: &ApiState) -> Result<UserDirectory, AppError> {
    let users: Vec<User> = talentsync_db::repositories::user::get_users(&state.db_pool)
        .await
        .map_err(TalentError::Database)?
        .into_iter()
        .map(User::from)
        .collect();

    Ok(UserDirectory::from_users(&users))
}
