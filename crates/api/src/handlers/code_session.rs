use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use talentsync_core::{
    errors::TalentError,
    models::code_session::{
        CodeSession, CodeSessionResponse, CreateCodeSessionRequest, UpdateCodeRequest,
        UpdateLanguageRequest, UpdateQuestionRequest,
    },
};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Creates the shared editor session for an interview. One session per
/// interview; its lifetime is bound to the parent.
#[axum::debug_handler]
pub async fn create_code_session(
    State(state): State<Arc<ApiState>>,
    Path(interview_id): Path<Uuid>,
    Json(payload): Json<CreateCodeSessionRequest>,
) -> Result<Json<CodeSessionResponse>, AppError> {
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

    let db_session = talentsync_db::repositories::code_session::create_code_session(
        &state.db_pool,
        interview_id,
        &payload,
    )
    .await
    .map_err(TalentError::Database)?;

    Ok(Json(CodeSession::from(db_session).into()))
}

#[axum::debug_handler]
pub async fn get_code_session(
    State(state): State<Arc<ApiState>>,
    Path(interview_id): Path<Uuid>,
) -> Result<Json<CodeSessionResponse>, AppError> {
    let db_session = talentsync_db::repositories::code_session::get_code_session_by_interview_id(
        &state.db_pool,
        interview_id,
    )
    .await
    .map_err(TalentError::Database)?
    .ok_or_else(|| {
        TalentError::NotFound(format!(
            "Code session for interview {} not found",
            interview_id
        ))
    })?;

    Ok(Json(CodeSession::from(db_session).into()))
}

#[axum::debug_handler]
pub async fn update_code(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCodeRequest>,
) -> Result<Json<CodeSessionResponse>, AppError> {
    let db_session =
        talentsync_db::repositories::code_session::update_code(&state.db_pool, id, &payload.code)
            .await
            .map_err(TalentError::Database)?
            .ok_or_else(|| {
                TalentError::NotFound(format!("Code session with ID {} not found", id))
            })?;

    Ok(Json(CodeSession::from(db_session).into()))
}

/// Switches the session language, replacing the editor contents with the
/// language's starter code.
#[axum::debug_handler]
pub async fn update_language(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLanguageRequest>,
) -> Result<Json<CodeSessionResponse>, AppError> {
    let db_session = talentsync_db::repositories::code_session::update_language(
        &state.db_pool,
        id,
        payload.language,
        &payload.code,
    )
    .await
    .map_err(TalentError::Database)?
    .ok_or_else(|| TalentError::NotFound(format!("Code session with ID {} not found", id)))?;

    Ok(Json(CodeSession::from(db_session).into()))
}

/// Switches the question, replacing the editor contents with the
/// question's starter code.
#[axum::debug_handler]
pub async fn update_question(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> Result<Json<CodeSessionResponse>, AppError> {
    let db_session = talentsync_db::repositories::code_session::update_question(
        &state.db_pool,
        id,
        &payload.question_id,
        &payload.starter_code,
    )
    .await
    .map_err(TalentError::Database)?
    .ok_or_else(|| TalentError::NotFound(format!("Code session with ID {} not found", id)))?;

    Ok(Json(CodeSession::from(db_session).into()))
}
