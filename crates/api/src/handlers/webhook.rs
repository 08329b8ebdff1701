//! # Identity-Provider Webhook
//!
//! Receives account-change deliveries from the identity provider. Every
//! delivery is signature-verified before the body is trusted; `user.created`
//! and `user.updated` events upsert the local user record, and any other
//! event type is acknowledged without action so the provider does not
//! redeliver it.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use talentsync_core::{
    errors::{TalentError, TalentResult},
    models::user::SyncUserRequest,
};

use crate::{
    ApiState,
    middleware::{auth, error_handling::AppError},
};

/// Envelope of a webhook delivery. `data` stays untyped until the event
/// type is known, since unhandled event types carry arbitrary shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookUserData {
    pub id: String,
    #[serde(default)]
    pub email_addresses: Vec<WebhookEmailAddress>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEmailAddress {
    pub email_address: String,
}

/// Maps a verified event to the user upsert it requires, if any.
///
/// `user.created` and `user.updated` produce a sync payload built from the
/// first email address and the concatenated first/last name (falling back
/// to the email when both are blank). Other event types produce `None`.
///
/// # Errors
///
/// * `TalentError::Validation` - a user event whose data does not parse or
///   that carries no email address
pub fn sync_request_from_event(event: &WebhookEvent) -> TalentResult<Option<SyncUserRequest>> {
    if event.event_type != "user.created" && event.event_type != "user.updated" {
        return Ok(None);
    }

    let data: WebhookUserData = serde_json::from_value(event.data.clone())
        .map_err(|e| TalentError::Validation(format!("Invalid user event data: {}", e)))?;

    let email = data
        .email_addresses
        .first()
        .map(|address| address.email_address.clone())
        .ok_or_else(|| {
            TalentError::Validation(format!("No email addresses found for user {}", data.id))
        })?;

    let name = format!(
        "{} {}",
        data.first_name.unwrap_or_default(),
        data.last_name.unwrap_or_default()
    );
    let name = name.trim().to_string();
    let name = if name.is_empty() { email.clone() } else { name };

    Ok(Some(SyncUserRequest {
        clerk_id: data.id,
        name,
        email,
        image: data.image_url,
    }))
}

#[axum::debug_handler]
pub async fn clerk_webhook(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let secret = state.config.webhook_secret.as_deref().ok_or_else(|| {
        tracing::error!("CLERK_WEBHOOK_SECRET is not configured");
        TalentError::Internal("Webhook secret is not configured".into())
    })?;

    let message_id = required_header(&headers, "svix-id")?;
    let timestamp = required_header(&headers, "svix-timestamp")?;
    let signature = required_header(&headers, "svix-signature")?;

    auth::verify_webhook_signature(
        secret,
        message_id,
        timestamp,
        signature,
        &body,
        Utc::now().timestamp(),
    )
    .map_err(|err| {
        tracing::warn!("Webhook signature verification failed: {}", err);
        err
    })?;

    let event: WebhookEvent = serde_json::from_slice(&body)
        .map_err(|e| TalentError::Validation(format!("Invalid webhook payload: {}", e)))?;

    tracing::info!("Webhook event received: {}", event.event_type);

    let Some(payload) = sync_request_from_event(&event)? else {
        tracing::debug!("Unhandled webhook event type: {}", event.event_type);
        return Ok(StatusCode::OK);
    };

    talentsync_db::repositories::user::upsert_user(&state.db_pool, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to sync user from webhook: {}", e);
            TalentError::Database(e)
        })?;

    tracing::info!("User synced from webhook: clerk_id={}", payload.clerk_id);

    Ok(StatusCode::OK)
}

fn required_header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, AppError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            AppError(TalentError::Validation(format!(
                "Missing {} header",
                name
            )))
        })
}
