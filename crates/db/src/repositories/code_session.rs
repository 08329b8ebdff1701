use crate::models::DbCodeSession;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use talentsync_core::models::code_session::{CreateCodeSessionRequest, Language};
use uuid::Uuid;

pub async fn create_code_session(
    pool: &Pool<Postgres>,
    interview_id: Uuid,
    payload: &CreateCodeSessionRequest,
) -> Result<DbCodeSession> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating code session: id={}, interview_id={}",
        id,
        interview_id
    );

    let session = sqlx::query_as::<_, DbCodeSession>(
        r#"
        INSERT INTO code_sessions (id, interview_id, code, language, question_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, interview_id, code, language, question_id, created_at
        "#,
    )
    .bind(id)
    .bind(interview_id)
    .bind(&payload.code)
    .bind(payload.language.as_str())
    .bind(&payload.question_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(session)
}

pub async fn get_code_session_by_interview_id(
    pool: &Pool<Postgres>,
    interview_id: Uuid,
) -> Result<Option<DbCodeSession>> {
    let session = sqlx::query_as::<_, DbCodeSession>(
        r#"
        SELECT id, interview_id, code, language, question_id, created_at
        FROM code_sessions
        WHERE interview_id = $1
        "#,
    )
    .bind(interview_id)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

pub async fn update_code(
    pool: &Pool<Postgres>,
    id: Uuid,
    code: &str,
) -> Result<Option<DbCodeSession>> {
    let session = sqlx::query_as::<_, DbCodeSession>(
        r#"
        UPDATE code_sessions
        SET code = $2
        WHERE id = $1
        RETURNING id, interview_id, code, language, question_id, created_at
        "#,
    )
    .bind(id)
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

pub async fn update_language(
    pool: &Pool<Postgres>,
    id: Uuid,
    language: Language,
    code: &str,
) -> Result<Option<DbCodeSession>> {
    let session = sqlx::query_as::<_, DbCodeSession>(
        r#"
        UPDATE code_sessions
        SET language = $2, code = $3
        WHERE id = $1
        RETURNING id, interview_id, code, language, question_id, created_at
        "#,
    )
    .bind(id)
    .bind(language.as_str())
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

pub async fn update_question(
    pool: &Pool<Postgres>,
    id: Uuid,
    question_id: &str,
    starter_code: &str,
) -> Result<Option<DbCodeSession>> {
    let session = sqlx::query_as::<_, DbCodeSession>(
        r#"
        UPDATE code_sessions
        SET question_id = $2, code = $3
        WHERE id = $1
        RETURNING id, interview_id, code, language, question_id, created_at
        "#,
    )
    .bind(id)
    .bind(question_id)
    .bind(starter_code)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}
