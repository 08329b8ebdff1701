use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TalentError;

/// Shared editor state for an interview. One session per interview; its
/// lifetime is bound to the parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSession {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub code: String,
    pub language: Language,
    pub question_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Python,
    Java,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = TalentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "javascript" => Ok(Language::Javascript),
            "python" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            other => Err(TalentError::Validation(format!(
                "Unsupported language: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCodeSessionRequest {
    pub code: String,
    pub language: Language,
    pub question_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCodeRequest {
    pub code: String,
}

/// Switching language replaces the editor contents with that language's
/// starter code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLanguageRequest {
    pub language: Language,
    pub code: String,
}

/// Switching question replaces the editor contents with the question's
/// starter code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateQuestionRequest {
    pub question_id: String,
    pub starter_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSessionResponse {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub code: String,
    pub language: Language,
    pub question_id: String,
}

impl From<CodeSession> for CodeSessionResponse {
    fn from(session: CodeSession) -> Self {
        Self {
            id: session.id,
            interview_id: session.interview_id,
            code: session.code,
            language: session.language,
            question_id: session.question_id,
        }
    }
}
