use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/users", get(handlers::user::list_users))
        .route("/api/users/sync", post(handlers::user::sync_user))
        .route("/api/users/:clerk_id", get(handlers::user::get_user))
        .route(
            "/api/users/:clerk_id/role",
            put(handlers::user::update_user_role),
        )
}
