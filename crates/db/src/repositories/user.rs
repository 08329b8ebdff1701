use crate::models::DbUser;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use talentsync_core::models::user::{SyncUserRequest, UserRole};
use uuid::Uuid;

/// Inserts or refreshes a user from identity-provider account data. New
/// accounts start as candidates; the role of an existing account is never
/// touched by a sync.
pub async fn upsert_user(pool: &Pool<Postgres>, payload: &SyncUserRequest) -> Result<DbUser> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Upserting user: clerk_id={}, email={}",
        payload.clerk_id,
        payload.email
    );

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, clerk_id, name, email, image, role, created_at)
        VALUES ($1, $2, $3, $4, $5, 'candidate', $6)
        ON CONFLICT (clerk_id) DO UPDATE
        SET name = EXCLUDED.name, email = EXCLUDED.email, image = EXCLUDED.image
        RETURNING id, clerk_id, name, email, image, role, created_at
        "#,
    )
    .bind(id)
    .bind(&payload.clerk_id)
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.image)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_users(pool: &Pool<Postgres>) -> Result<Vec<DbUser>> {
    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, clerk_id, name, email, image, role, created_at
        FROM users
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn get_user_by_clerk_id(
    pool: &Pool<Postgres>,
    clerk_id: &str,
) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, clerk_id, name, email, image, role, created_at
        FROM users
        WHERE clerk_id = $1
        "#,
    )
    .bind(clerk_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn update_user_role(
    pool: &Pool<Postgres>,
    clerk_id: &str,
    role: UserRole,
) -> Result<Option<DbUser>> {
    tracing::debug!("Updating user role: clerk_id={}, role={}", clerk_id, role);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        UPDATE users
        SET role = $2
        WHERE clerk_id = $1
        RETURNING id, clerk_id, name, email, image, role, created_at
        "#,
    )
    .bind(clerk_id)
    .bind(role.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
