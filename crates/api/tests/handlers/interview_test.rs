use chrono::{DateTime, Duration, TimeZone, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use talentsync_core::errors::TalentError;
use talentsync_core::grouping::group_interviews_at;
use talentsync_core::models::comment::{CreateCommentRequest, RATING_RANGE};
use talentsync_core::models::interview::{
    CreateInterviewRequest, CreateInterviewResponse, Interview, InterviewStatus,
};
use talentsync_core::stats::compute_stats;
use talentsync_db::models::DbInterview;
use uuid::Uuid;

use crate::test_utils::{TestContext, db_interview};
use talentsync_api::middleware::error_handling::AppError;

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

fn create_request() -> CreateInterviewRequest {
    CreateInterviewRequest {
        title: "Backend screen".to_string(),
        description: Some("Pairing on a queue design".to_string()),
        start_time: reference() + Duration::days(1),
        end_time: None,
        call_id: "9d2a41f0-aaaa-bbbb-cccc-000000000001".to_string(),
        candidate_id: "cand_1".to_string(),
        interviewer_ids: vec!["int_1".to_string()],
    }
}

// Replays the handler's validate-then-create flow against the mock
// repository.
async fn create_interview_wrapper(
    ctx: &mut TestContext,
    payload: CreateInterviewRequest,
) -> Result<CreateInterviewResponse, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError(TalentError::Validation(
            "Interview title must not be empty".to_string(),
        )));
    }
    if payload.candidate_id.is_empty() {
        return Err(AppError(TalentError::Validation(
            "A candidate must be selected".to_string(),
        )));
    }
    if payload.interviewer_ids.is_empty() {
        return Err(AppError(TalentError::Validation(
            "At least one interviewer must be selected".to_string(),
        )));
    }
    if payload.call_id.is_empty() {
        return Err(AppError(TalentError::Validation(
            "A call reference is required".to_string(),
        )));
    }

    let db_interview = ctx
        .interview_repo
        .create_interview(payload)
        .await
        .map_err(TalentError::Database)?;

    Ok(Interview::from(db_interview).into())
}

async fn update_status_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
    status: InterviewStatus,
) -> Result<Interview, AppError> {
    let db_interview = ctx
        .interview_repo
        .update_interview_status(id, status)
        .await
        .map_err(TalentError::Database)?
        .ok_or_else(|| TalentError::NotFound(format!("Interview with ID {} not found", id)))?;

    Ok(Interview::from(db_interview))
}

async fn create_comment_wrapper(
    ctx: &mut TestContext,
    interview_id: Uuid,
    payload: CreateCommentRequest,
) -> Result<(), AppError> {
    if !RATING_RANGE.contains(&payload.rating) {
        return Err(AppError(TalentError::Validation(format!(
            "Rating must be between {} and {}",
            RATING_RANGE.start(),
            RATING_RANGE.end()
        ))));
    }

    let interview_exists = ctx
        .interview_repo
        .get_interview_by_id(interview_id)
        .await
        .map_err(TalentError::Database)?
        .is_some();

    if !interview_exists {
        return Err(AppError(TalentError::NotFound(format!(
            "Interview with ID {} not found",
            interview_id
        ))));
    }

    ctx.comment_repo
        .create_comment(interview_id, payload)
        .await
        .map_err(TalentError::Database)?;

    Ok(())
}

#[tokio::test]
async fn test_create_interview_success() {
    let mut ctx = TestContext::new();
    let request = create_request();
    let expected = request.clone();

    ctx.interview_repo
        .expect_create_interview()
        .with(predicate::eq(expected))
        .times(1)
        .returning(|payload| {
            Ok(DbInterview {
                id: Uuid::new_v4(),
                title: payload.title,
                description: payload.description,
                start_time: payload.start_time,
                end_time: payload.end_time,
                status: "upcoming".to_string(),
                call_id: payload.call_id,
                candidate_id: payload.candidate_id,
                interviewer_ids: payload.interviewer_ids,
                created_at: payload.start_time,
            })
        });

    let response = create_interview_wrapper(&mut ctx, request.clone())
        .await
        .unwrap();

    assert_eq!(response.title, request.title);
    assert_eq!(response.start_time, request.start_time);
    assert_eq!(response.call_id, request.call_id);
}

#[tokio::test]
async fn test_create_interview_requires_a_candidate() {
    let mut ctx = TestContext::new();
    let mut request = create_request();
    request.candidate_id = String::new();

    // The doomed mutation never reaches the repository.
    ctx.interview_repo.expect_create_interview().times(0);

    let result = create_interview_wrapper(&mut ctx, request).await;

    match result.unwrap_err().0 {
        TalentError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_interview_requires_interviewers() {
    let mut ctx = TestContext::new();
    let mut request = create_request();
    request.interviewer_ids.clear();

    ctx.interview_repo.expect_create_interview().times(0);

    let result = create_interview_wrapper(&mut ctx, request).await;

    assert!(matches!(
        result.unwrap_err().0,
        TalentError::Validation(_)
    ));
}

#[tokio::test]
async fn test_update_status_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.interview_repo
        .expect_update_interview_status()
        .with(predicate::eq(id), predicate::eq(InterviewStatus::Completed))
        .returning(|_, _| Ok(None));

    let result = update_status_wrapper(&mut ctx, id, InterviewStatus::Completed).await;

    match result.unwrap_err().0 {
        TalentError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_ending_the_call_persists_completed() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();
    let now = reference();

    ctx.interview_repo
        .expect_update_interview_status()
        .with(predicate::eq(id), predicate::eq(InterviewStatus::Completed))
        .times(1)
        .returning(move |id, status| {
            let mut row = db_interview(now - Duration::minutes(20), status.as_str());
            row.id = id;
            Ok(Some(row))
        });

    let interview = update_status_wrapper(&mut ctx, id, InterviewStatus::Completed)
        .await
        .unwrap();

    assert_eq!(interview.status, Some(InterviewStatus::Completed));
}

#[tokio::test]
async fn test_dashboard_pipeline_over_fetched_rows() {
    // Rows straight from the repository flow through the status parse, the
    // grouper, and the aggregator.
    let mut ctx = TestContext::new();
    let now = reference();

    ctx.interview_repo
        .expect_get_all_interviews()
        .returning(move || {
            Ok(vec![
                db_interview(now + Duration::days(4), "upcoming"),
                db_interview(now - Duration::days(1), "succeeded"),
                db_interview(now - Duration::days(2), "failed"),
                db_interview(now - Duration::hours(3), "upcoming"),
            ])
        });

    let interviews: Vec<Interview> = ctx
        .interview_repo
        .get_all_interviews()
        .await
        .unwrap()
        .into_iter()
        .map(Interview::from)
        .collect();

    let groups = group_interviews_at(&interviews, &now);
    let stats = compute_stats(&groups);

    assert_eq!(stats.total, 4);
    assert_eq!(stats.upcoming_count, 1);
    assert_eq!(stats.completed_count, 3);
    assert_eq!(stats.succeeded_count, 1);
    assert_eq!(stats.failed_count, 1);
    assert_eq!(stats.success_rate_percent, 33);
}

#[tokio::test]
async fn test_comment_rating_is_range_checked() {
    let mut ctx = TestContext::new();
    let interview_id = Uuid::new_v4();

    ctx.interview_repo.expect_get_interview_by_id().times(0);
    ctx.comment_repo.expect_create_comment().times(0);

    let result = create_comment_wrapper(
        &mut ctx,
        interview_id,
        CreateCommentRequest {
            interviewer_id: "int_1".to_string(),
            content: "Strong on fundamentals".to_string(),
            rating: 0,
        },
    )
    .await;

    assert!(matches!(
        result.unwrap_err().0,
        TalentError::Validation(_)
    ));
}

#[tokio::test]
async fn test_comment_appends_to_an_existing_interview() {
    let mut ctx = TestContext::new();
    let interview_id = Uuid::new_v4();
    let now = reference();

    ctx.interview_repo
        .expect_get_interview_by_id()
        .with(predicate::eq(interview_id))
        .returning(move |id| {
            let mut row = db_interview(now - Duration::hours(2), "completed");
            row.id = id;
            Ok(Some(row))
        });

    let request = CreateCommentRequest {
        interviewer_id: "int_1".to_string(),
        content: "Strong on fundamentals".to_string(),
        rating: 4,
    };

    ctx.comment_repo
        .expect_create_comment()
        .with(predicate::eq(interview_id), predicate::eq(request.clone()))
        .times(1)
        .returning(|interview_id, payload| {
            Ok(talentsync_db::models::DbComment {
                id: Uuid::new_v4(),
                interview_id,
                interviewer_id: payload.interviewer_id,
                content: payload.content,
                rating: payload.rating,
                created_at: Utc::now(),
            })
        });

    assert!(
        create_comment_wrapper(&mut ctx, interview_id, request)
            .await
            .is_ok()
    );
}
