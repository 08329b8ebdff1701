use crate::models::DbInterview;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use talentsync_core::models::interview::{CreateInterviewRequest, InterviewStatus};
use uuid::Uuid;

pub async fn create_interview(
    pool: &Pool<Postgres>,
    payload: &CreateInterviewRequest,
) -> Result<DbInterview> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating interview: id={}, title={}, call_id={}",
        id,
        payload.title,
        payload.call_id
    );

    let interview = sqlx::query_as::<_, DbInterview>(
        r#"
        INSERT INTO interviews
            (id, title, description, start_time, end_time, status, call_id,
             candidate_id, interviewer_ids, created_at)
        VALUES ($1, $2, $3, $4, $5, 'upcoming', $6, $7, $8, $9)
        RETURNING id, title, description, start_time, end_time, status, call_id,
                  candidate_id, interviewer_ids, created_at
        "#,
    )
    .bind(id)
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(payload.start_time)
    .bind(payload.end_time)
    .bind(&payload.call_id)
    .bind(&payload.candidate_id)
    .bind(&payload.interviewer_ids)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(interview)
}

pub async fn get_all_interviews(pool: &Pool<Postgres>) -> Result<Vec<DbInterview>> {
    let interviews = sqlx::query_as::<_, DbInterview>(
        r#"
        SELECT id, title, description, start_time, end_time, status, call_id,
               candidate_id, interviewer_ids, created_at
        FROM interviews
        ORDER BY start_time ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(interviews)
}

pub async fn get_interview_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbInterview>> {
    let interview = sqlx::query_as::<_, DbInterview>(
        r#"
        SELECT id, title, description, start_time, end_time, status, call_id,
               candidate_id, interviewer_ids, created_at
        FROM interviews
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(interview)
}

pub async fn get_interviews_by_candidate_id(
    pool: &Pool<Postgres>,
    candidate_id: &str,
) -> Result<Vec<DbInterview>> {
    let interviews = sqlx::query_as::<_, DbInterview>(
        r#"
        SELECT id, title, description, start_time, end_time, status, call_id,
               candidate_id, interviewer_ids, created_at
        FROM interviews
        WHERE candidate_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(candidate_id)
    .fetch_all(pool)
    .await?;

    Ok(interviews)
}

pub async fn get_interview_by_call_id(
    pool: &Pool<Postgres>,
    call_id: &str,
) -> Result<Option<DbInterview>> {
    let interview = sqlx::query_as::<_, DbInterview>(
        r#"
        SELECT id, title, description, start_time, end_time, status, call_id,
               candidate_id, interviewer_ids, created_at
        FROM interviews
        WHERE call_id = $1
        "#,
    )
    .bind(call_id)
    .fetch_optional(pool)
    .await?;

    Ok(interview)
}

pub async fn update_interview_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: InterviewStatus,
) -> Result<Option<DbInterview>> {
    tracing::debug!("Updating interview status: id={}, status={}", id, status);

    let interview = sqlx::query_as::<_, DbInterview>(
        r#"
        UPDATE interviews
        SET status = $2
        WHERE id = $1
        RETURNING id, title, description, start_time, end_time, status, call_id,
                  candidate_id, interviewer_ids, created_at
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(interview)
}
