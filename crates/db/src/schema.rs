use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            clerk_id VARCHAR(255) NOT NULL UNIQUE,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            image TEXT NULL,
            role VARCHAR(32) NOT NULL DEFAULT 'candidate',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create interviews table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS interviews (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title VARCHAR(255) NOT NULL,
            description TEXT NULL,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'upcoming',
            call_id VARCHAR(255) NOT NULL,
            candidate_id VARCHAR(255) NOT NULL,
            interviewer_ids TEXT[] NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create comments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            interview_id UUID NOT NULL REFERENCES interviews(id),
            interviewer_id VARCHAR(255) NOT NULL,
            content TEXT NOT NULL,
            rating INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create code_sessions table (one session per interview)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS code_sessions (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            interview_id UUID NOT NULL UNIQUE REFERENCES interviews(id),
            code TEXT NOT NULL,
            language VARCHAR(32) NOT NULL,
            question_id VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for the lookup paths the handlers use
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_users_clerk_id ON users(clerk_id);",
        "CREATE INDEX IF NOT EXISTS idx_interviews_call_id ON interviews(call_id);",
        "CREATE INDEX IF NOT EXISTS idx_interviews_candidate_id ON interviews(candidate_id);",
        "CREATE INDEX IF NOT EXISTS idx_comments_interview_id ON comments(interview_id);",
        "CREATE INDEX IF NOT EXISTS idx_code_sessions_interview_id ON code_sessions(interview_id);",
    ];
    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
