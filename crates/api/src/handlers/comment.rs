use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use talentsync_core::{
    errors::TalentError,
    models::comment::{Comment, CommentResponse, CreateCommentRequest, RATING_RANGE},
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Appends interviewer feedback to an interview. Comments are append-only;
/// there is no update or delete.
#[axum::debug_handler]
pub async fn create_comment(
    State(state): State<Arc<ApiState>>,
    Path(interview_id): Path<Uuid>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<Json<CommentResponse>, AppError> {
    if !RATING_RANGE.contains(&payload.rating) {
        return Err(AppError(TalentError::Validation(format!(
            "Rating must be between {} and {}",
            RATING_RANGE.start(),
            RATING_RANGE.end()
        ))));
    }

    // Check if the interview exists
    let interview_exists =
        talentsync_db::repositories::interview::get_interview_by_id(&state.db_pool, interview_id)
            .await
            .map_err(TalentError::Database)?
            .is_some();

    if !interview_exists {
        return Err(AppError(TalentError::NotFound(format!(
            "Interview with ID {} not found",
            interview_id
        ))));
    }

    let db_comment =
        talentsync_db::repositories::comment::create_comment(&state.db_pool, interview_id, &payload)
            .await
            .map_err(TalentError::Database)?;

    Ok(Json(Comment::from(db_comment).into()))
}

#[axum::debug_handler]
pub async fn list_comments(
    State(state): State<Arc<ApiState>>,
    Path(interview_id): Path<Uuid>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let comments = talentsync_db::repositories::comment::get_comments_by_interview_id(
        &state.db_pool,
        interview_id,
    )
    .await
    .map_err(TalentError::Database)?
    .into_iter()
    .map(|row| CommentResponse::from(Comment::from(row)))
    .collect();

    Ok(Json(comments))
}
