//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! TalentSync API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error
//! handling experience across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with TalentSync's custom error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use talentsync_core::errors::TalentError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `TalentError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
///
/// # Example
///
/// ```ignore
/// async fn handler(id: Uuid) -> Result<Json<InterviewResponse>, AppError> {
///     let interview = repositories::interview::get_interview_by_id(&pool, id)
///         .await
///         .map_err(TalentError::Database)?
///         .ok_or_else(|| TalentError::NotFound(format!("Interview with ID {} not found", id)))?;
///
///     Ok(Json(interview.into()))
/// }
/// ```
#[derive(Debug)]
pub struct AppError(pub TalentError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            TalentError::NotFound(_) => StatusCode::NOT_FOUND,
            TalentError::Validation(_) => StatusCode::BAD_REQUEST,
            TalentError::Authentication(_) => StatusCode::UNAUTHORIZED,
            TalentError::Authorization(_) => StatusCode::FORBIDDEN,
            TalentError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TalentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from TalentError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, TalentError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<TalentError> for AppError {
    fn from(err: TalentError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, eyre::Report>` in handler functions that return
/// `Result<T, AppError>`. It wraps the eyre error in a
/// `TalentError::Database` variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TalentError::Database(err))
    }
}

/// Maps a TalentError to an HTTP response
///
/// This function is provided for code that directly needs the error
/// mapping without going through a handler return value.
pub fn map_error(err: TalentError) -> Response {
    AppError(err).into_response()
}
