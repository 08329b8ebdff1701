use crate::models::DbComment;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use talentsync_core::models::comment::CreateCommentRequest;
use uuid::Uuid;

pub async fn create_comment(
    pool: &Pool<Postgres>,
    interview_id: Uuid,
    payload: &CreateCommentRequest,
) -> Result<DbComment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let comment = sqlx::query_as::<_, DbComment>(
        r#"
        INSERT INTO comments (id, interview_id, interviewer_id, content, rating, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, interview_id, interviewer_id, content, rating, created_at
        "#,
    )
    .bind(id)
    .bind(interview_id)
    .bind(&payload.interviewer_id)
    .bind(&payload.content)
    .bind(payload.rating)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

pub async fn get_comments_by_interview_id(
    pool: &Pool<Postgres>,
    interview_id: Uuid,
) -> Result<Vec<DbComment>> {
    let comments = sqlx::query_as::<_, DbComment>(
        r#"
        SELECT id, interview_id, interviewer_id, content, rating, created_at
        FROM comments
        WHERE interview_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(interview_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}
