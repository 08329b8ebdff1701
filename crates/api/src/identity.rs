//! # Identity Provider Client
//!
//! Outbound client for the identity provider's backend API, plus the
//! bounded retry policy around token fetching.
//!
//! The provider occasionally rejects a freshly issued token with an
//! issued-at timing error when the local clock runs ahead of the
//! provider's. That one failure signature is retried with exponential
//! backoff, capped at three attempts; every other error propagates
//! unchanged on first failure. Retry state is a small caller-owned value
//! rather than ambient framework state, and the backoff suspension is
//! non-blocking. Dropping the future abandons any pending retry.

use async_trait::async_trait;
use eyre::{Result, eyre};
use serde::Deserialize;
use std::time::Duration;

/// Failure signature of the provider's clock-skew rejection. Only errors
/// carrying this marker are retried.
pub const TOKEN_SKEW_SIGNATURE: &str = "AuthErrorTokenUsedBeforeIssuedAt";

/// Maximum number of retries after the initial attempt.
pub const MAX_TOKEN_RETRIES: u32 = 3;

/// Retry bookkeeping owned by the caller of the token fetch.
///
/// `attempt` counts retries performed so far; `retrying` is true while a
/// backoff suspension or retried fetch is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryState {
    pub attempt: u32,
    pub retrying: bool,
}

impl RetryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the retry budget. Call whenever the sign-in session changes.
    pub fn reset(&mut self) {
        self.attempt = 0;
        self.retrying = false;
    }
}

/// Backoff policy: `2^attempt` seconds before the next fetch.
pub fn retry_delay(attempt: u32) -> Duration {
    Duration::from_secs(1u64 << attempt)
}

/// Seam over the provider's token endpoint so the retry wrapper can be
/// exercised without network access.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn fetch_token(&self) -> Result<String>;
}

/// Fetches a token, retrying only the clock-skew failure signature with
/// exponential backoff, up to [`MAX_TOKEN_RETRIES`] times. Any other error
/// propagates unchanged.
pub async fn fetch_token_with_retry(
    provider: &dyn TokenProvider,
    state: &mut RetryState,
) -> Result<String> {
    loop {
        match provider.fetch_token().await {
            Ok(token) => {
                state.retrying = false;
                return Ok(token);
            }
            Err(error) => {
                let skew = error.to_string().contains(TOKEN_SKEW_SIGNATURE);
                if !skew || state.attempt >= MAX_TOKEN_RETRIES {
                    state.retrying = false;
                    return Err(error);
                }

                state.retrying = true;
                let delay = retry_delay(state.attempt);
                state.attempt += 1;
                tracing::warn!(
                    "Token fetch hit issued-at skew; retrying in {:?} (attempt {})",
                    delay,
                    state.attempt
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Token provider backed by the identity provider's session-token
/// endpoint.
pub struct ClerkTokenProvider {
    client: reqwest::Client,
    api_url: String,
    secret_key: String,
    session_id: String,
}

impl ClerkTokenProvider {
    pub fn new(api_url: String, secret_key: String, session_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            secret_key,
            session_id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SessionTokenResponse {
    jwt: String,
}

#[async_trait]
impl TokenProvider for ClerkTokenProvider {
    async fn fetch_token(&self) -> Result<String> {
        let response = self
            .client
            .post(format!(
                "{}/sessions/{}/tokens",
                self.api_url, self.session_id
            ))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(eyre!(
                "Identity provider error fetching session token: {} - {}",
                status,
                body
            ));
        }

        let token: SessionTokenResponse = response.json().await?;
        Ok(token.jwt)
    }
}
