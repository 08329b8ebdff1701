use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/interviews/:id/code-session",
            get(handlers::code_session::get_code_session),
        )
        .route(
            "/api/interviews/:id/code-session",
            post(handlers::code_session::create_code_session),
        )
        .route(
            "/api/code-sessions/:id/code",
            put(handlers::code_session::update_code),
        )
        .route(
            "/api/code-sessions/:id/language",
            put(handlers::code_session::update_language),
        )
        .route(
            "/api/code-sessions/:id/question",
            put(handlers::code_session::update_question),
        )
}
