use chrono::{Duration, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use talentsync_core::errors::TalentError;
use talentsync_core::models::code_session::{
    CodeSession, CodeSessionResponse, CreateCodeSessionRequest, Language,
};
use uuid::Uuid;

use crate::test_utils::{TestContext, db_code_session, db_interview};
use talentsync_api::middleware::error_handling::AppError;

async fn create_session_wrapper(
    ctx: &mut TestContext,
    interview_id: Uuid,
    payload: CreateCodeSessionRequest,
) -> Result<CodeSessionResponse, AppError> {
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

    let db_session = ctx
        .code_session_repo
        .create_code_session(interview_id, payload)
        .await
        .map_err(TalentError::Database)?;

    Ok(CodeSession::from(db_session).into())
}

async fn update_language_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
    language: Language,
    code: &'static str,
) -> Result<CodeSessionResponse, AppError> {
    let db_session = ctx
        .code_session_repo
        .update_language(id, language, code)
        .await
        .map_err(TalentError::Database)?
        .ok_or_else(|| TalentError::NotFound(format!("Code session with ID {} not found", id)))?;

    Ok(CodeSession::from(db_session).into())
}

async fn update_question_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
    question_id: &'static str,
    starter_code: &'static str,
) -> Result<CodeSessionResponse, AppError> {
    let db_session = ctx
        .code_session_repo
        .update_question(id, question_id, starter_code)
        .await
        .map_err(TalentError::Database)?
        .ok_or_else(|| TalentError::NotFound(format!("Code session with ID {} not found", id)))?;

    Ok(CodeSession::from(db_session).into())
}

#[tokio::test]
async fn test_create_session_for_an_existing_interview() {
    let mut ctx = TestContext::new();
    let interview_id = Uuid::new_v4();
    let now = Utc::now();

    ctx.interview_repo
        .expect_get_interview_by_id()
        .with(predicate::eq(interview_id))
        .returning(move |id| {
            let mut row = db_interview(now + Duration::hours(1), "upcoming");
            row.id = id;
            Ok(Some(row))
        });

    let request = CreateCodeSessionRequest {
        code: "function twoSum(nums, target) {}".to_string(),
        language: Language::Javascript,
        question_id: "two-sum".to_string(),
    };

    ctx.code_session_repo
        .expect_create_code_session()
        .with(predicate::eq(interview_id), predicate::eq(request.clone()))
        .times(1)
        .returning(|interview_id, payload| {
            Ok(db_code_session(
                interview_id,
                payload.language.as_str(),
                &payload.code,
            ))
        });

    let response = create_session_wrapper(&mut ctx, interview_id, request)
        .await
        .unwrap();

    assert_eq!(response.interview_id, interview_id);
    assert_eq!(response.language, Language::Javascript);
}

#[tokio::test]
async fn test_create_session_for_a_missing_interview() {
    let mut ctx = TestContext::new();
    let interview_id = Uuid::new_v4();

    ctx.interview_repo
        .expect_get_interview_by_id()
        .returning(|_| Ok(None));
    ctx.code_session_repo.expect_create_code_session().times(0);

    let result = create_session_wrapper(
        &mut ctx,
        interview_id,
        CreateCodeSessionRequest {
            code: String::new(),
            language: Language::Python,
            question_id: "two-sum".to_string(),
        },
    )
    .await;

    match result.unwrap_err().0 {
        TalentError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_language_switch_replaces_the_editor_contents() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();
    let starter = "def two_sum(nums, target):\n    pass";

    ctx.code_session_repo
        .expect_update_language()
        .with(
            predicate::eq(id),
            predicate::eq(Language::Python),
            predicate::eq(starter),
        )
        .times(1)
        .returning(|_, language, code| {
            Ok(Some(db_code_session(
                Uuid::new_v4(),
                language.as_str(),
                code,
            )))
        });

    let response = update_language_wrapper(&mut ctx, id, Language::Python, starter)
        .await
        .unwrap();

    assert_eq!(response.language, Language::Python);
    assert_eq!(response.code, starter);
}

#[tokio::test]
async fn test_question_switch_replaces_the_editor_contents() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();
    let starter = "function reverseList(head) {}";

    ctx.code_session_repo
        .expect_update_question()
        .with(
            predicate::eq(id),
            predicate::eq("reverse-linked-list"),
            predicate::eq(starter),
        )
        .times(1)
        .returning(|_, question_id, starter_code| {
            let mut session = db_code_session(Uuid::new_v4(), "javascript", starter_code);
            session.question_id = question_id.to_string();
            Ok(Some(session))
        });

    let response = update_question_wrapper(&mut ctx, id, "reverse-linked-list", starter)
        .await
        .unwrap();

    assert_eq!(response.question_id, "reverse-linked-list");
    assert_eq!(response.code, starter);
}

#[tokio::test]
async fn test_update_for_a_missing_session() {
    let mut ctx = TestContext::new();

    ctx.code_session_repo
        .expect_update_language()
        .returning(|_, _, _| Ok(None));

    let result =
        update_language_wrapper(&mut ctx, Uuid::new_v4(), Language::Java, "class Solution {}")
            .await;

    assert!(matches!(result.unwrap_err().0, TalentError::NotFound(_)));
}
