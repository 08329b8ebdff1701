use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use talentsync_core::{
    errors::TalentError,
    models::user::{SyncUserRequest, UpdateUserRoleRequest, User, UserResponse},
};

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = talentsync_db::repositories::user::get_users(&state.db_pool)
        .await
        .map_err(TalentError::Database)?
        .into_iter()
        .map(|row| UserResponse::from(User::from(row)))
        .collect();

    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<Arc<ApiState>>,
    Path(clerk_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let db_user = talentsync_db::repositories::user::get_user_by_clerk_id(&state.db_pool, &clerk_id)
        .await
        .map_err(TalentError::Database)?
        .ok_or_else(|| TalentError::NotFound(format!("User with ID {} not found", clerk_id)))?;

    Ok(Json(User::from(db_user).into()))
}

/// Manual counterpart of the webhook upsert: the client pushes the
/// identity-provider account data directly after sign-in.
#[axum::debug_handler]
pub async fn sync_user(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SyncUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    if payload.clerk_id.is_empty() {
        return Err(AppError(TalentError::Validation(
            "An identity reference is required".to_string(),
        )));
    }
    if payload.email.is_empty() {
        return Err(AppError(TalentError::Validation(
            "An email address is required".to_string(),
        )));
    }

    let db_user = talentsync_db::repositories::user::upsert_user(&state.db_pool, &payload)
        .await
        .map_err(TalentError::Database)?;

    Ok(Json(User::from(db_user).into()))
}

/// Administrator action flipping an account between candidate and
/// interviewer.
#[axum::debug_handler]
pub async fn update_user_role(
    State(state): State<Arc<ApiState>>,
    Path(clerk_id): Path<String>,
    Json(payload): Json<UpdateUserRoleRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let db_user =
        talentsync_db::repositories::user::update_user_role(&state.db_pool, &clerk_id, payload.role)
            .await
            .map_err(TalentError::Database)?
            .ok_or_else(|| {
                TalentError::NotFound(format!("User with ID {} not found", clerk_id))
            })?;

    tracing::info!("User role updated: clerk_id={}, role={}", clerk_id, payload.role);

    Ok(Json(User::from(db_user).into()))
}
