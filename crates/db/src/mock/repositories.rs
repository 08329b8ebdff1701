use mockall::mock;
use uuid::Uuid;

use talentsync_core::models::code_session::{CreateCodeSessionRequest, Language};
use talentsync_core::models::comment::CreateCommentRequest;
use talentsync_core::models::interview::{CreateInterviewRequest, InterviewStatus};
use talentsync_core::models::user::{SyncUserRequest, UserRole};

use crate::models::{DbCodeSession, DbComment, DbInterview, DbUser};

// Mock repositories for testing

mock! {
    pub UserRepo {
        pub async fn upsert_user(
            &self,
            payload: SyncUserRequest,
        ) -> eyre::Result<DbUser>;

        pub async fn get_users(&self) -> eyre::Result<Vec<DbUser>>;

        pub async fn get_user_by_clerk_id(
            &self,
            clerk_id: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn update_user_role(
            &self,
            clerk_id: &'static str,
            role: UserRole,
        ) -> eyre::Result<Option<DbUser>>;
    }
}

mock! {
    pub InterviewRepo {
        pub async fn create_interview(
            &self,
            payload: CreateInterviewRequest,
        ) -> eyre::Result<DbInterview>;

        pub async fn get_all_interviews(&self) -> eyre::Result<Vec<DbInterview>>;

        pub async fn get_interview_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbInterview>>;

        pub async fn get_interviews_by_candidate_id(
            &self,
            candidate_id: &'static str,
        ) -> eyre::Result<Vec<DbInterview>>;

        pub async fn get_interview_by_call_id(
            &self,
            call_id: &'static str,
        ) -> eyre::Result<Option<DbInterview>>;

        pub async fn update_interview_status(
            &self,
            id: Uuid,
            status: InterviewStatus,
        ) -> eyre::Result<Option<DbInterview>>;
    }
}

mock! {
    pub CommentRepo {
        pub async fn create_comment(
            &self,
            interview_id: Uuid,
            payload: CreateCommentRequest,
        ) -> eyre::Result<DbComment>;

        pub async fn get_comments_by_interview_id(
            &self,
            interview_id: Uuid,
        ) -> eyre::Result<Vec<DbComment>>;
    }
}

mock! {
    pub CodeSessionRepo {
        pub async fn create_code_session(
            &self,
            interview_id: Uuid,
            payload: CreateCodeSessionRequest,
        ) -> eyre::Result<DbCodeSession>;

        pub async fn get_code_session_by_interview_id(
            &self,
            interview_id: Uuid,
        ) -> eyre::Result<Option<DbCodeSession>>;

        pub async fn update_code(
            &self,
            id: Uuid,
            code: &'static str,
        ) -> eyre::Result<Option<DbCodeSession>>;

        pub async fn update_language(
            &self,
            id: Uuid,
            language: Language,
            code: &'static str,
        ) -> eyre::Result<Option<DbCodeSession>>;

        pub async fn update_question(
            &self,
            id: Uuid,
            question_id: &'static str,
            starter_code: &'static str,
        ) -> eyre::Result<Option<DbCodeSession>>;
    }
}
