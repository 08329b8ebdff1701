use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/interviews", post(handlers::interview::create_interview))
        .route("/api/interviews", get(handlers::interview::list_interviews))
        .route(
            "/api/interviews/grouped",
            get(handlers::interview::grouped_interviews),
        )
        .route(
            "/api/interviews/dashboard",
            get(handlers::interview::dashboard),
        )
        .route("/api/interviews/:id", get(handlers::interview::get_interview))
        .route(
            "/api/interviews/:id/status",
            put(handlers::interview::update_interview_status),
        )
        .route(
            "/api/interviews/:id/comments",
            get(handlers::comment::list_comments),
        )
        .route(
            "/api/interviews/:id/comments",
            post(handlers::comment::create_comment),
        )
        .route(
            "/api/calls/:call_id/interview",
            get(handlers::interview::get_interview_by_call),
        )
}
