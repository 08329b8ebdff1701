use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use chrono::Utc;
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::json;
use talentsync_api::handlers::webhook::{WebhookEvent, clerk_webhook, sync_request_from_event};
use talentsync_api::middleware::auth::{
    TIMESTAMP_TOLERANCE_SECS, sign_webhook_payload, verify_webhook_signature,
};
use talentsync_api::middleware::error_handling::AppError;
use talentsync_core::errors::TalentError;
use talentsync_core::models::user::SyncUserRequest;

use crate::test_utils::{TestContext, test_webhook_secret};

fn user_created_event() -> serde_json::Value {
    json!({
        "type": "user.created",
        "data": {
            "id": "user_abc123",
            "email_addresses": [
                { "email_address": "jane@example.com" },
                { "email_address": "jane.backup@example.com" }
            ],
            "first_name": "Jane",
            "last_name": "Doe",
            "image_url": "https://img.example.com/jane.png"
        }
    })
}

fn signed_headers(secret: &str, body: &[u8]) -> HeaderMap {
    let timestamp = Utc::now().timestamp().to_string();
    let signature = sign_webhook_payload(secret, "msg_1", &timestamp, body).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert("svix-id", HeaderValue::from_static("msg_1"));
    headers.insert("svix-timestamp", HeaderValue::from_str(&timestamp).unwrap());
    headers.insert("svix-signature", HeaderValue::from_str(&signature).unwrap());
    headers
}

// Replays the handler's event-to-upsert tail against mock repositories.
async fn process_event_wrapper(
    ctx: &mut TestContext,
    event: &WebhookEvent,
) -> Result<StatusCode, AppError> {
    match sync_request_from_event(event)? {
        Some(payload) => {
            ctx.user_repo
                .upsert_user(payload)
                .await
                .map_err(TalentError::Database)?;
            Ok(StatusCode::OK)
        }
        None => Ok(StatusCode::OK),
    }
}

#[test]
fn test_valid_signature_verifies() {
    let secret = test_webhook_secret();
    let body = b"{\"type\":\"user.created\"}";
    let now = Utc::now().timestamp();
    let timestamp = now.to_string();

    let signature = sign_webhook_payload(&secret, "msg_1", &timestamp, body).unwrap();

    assert!(
        verify_webhook_signature(&secret, "msg_1", &timestamp, &signature, body, now).is_ok()
    );
}

#[test]
fn test_tampered_payload_is_rejected() {
    let secret = test_webhook_secret();
    let now = Utc::now().timestamp();
    let timestamp = now.to_string();

    let signature =
        sign_webhook_payload(&secret, "msg_1", &timestamp, b"original body").unwrap();

    let result =
        verify_webhook_signature(&secret, "msg_1", &timestamp, &signature, b"tampered body", now);

    assert!(matches!(result, Err(TalentError::Validation(_))));
}

#[test]
fn test_any_matching_candidate_verifies() {
    // Multiple space-separated candidates appear after a secret rotation;
    // one match is enough.
    let secret = test_webhook_secret();
    let body = b"payload";
    let now = Utc::now().timestamp();
    let timestamp = now.to_string();

    let good = sign_webhook_payload(&secret, "msg_1", &timestamp, body).unwrap();
    let header = format!("v1,c2lnbmF0dXJl {}", good);

    assert!(verify_webhook_signature(&secret, "msg_1", &timestamp, &header, body, now).is_ok());
}

#[test]
fn test_stale_timestamp_is_rejected() {
    let secret = test_webhook_secret();
    let body = b"payload";
    let now = Utc::now().timestamp();
    let sent_at = now - TIMESTAMP_TOLERANCE_SECS - 1;
    let timestamp = sent_at.to_string();

    let signature = sign_webhook_payload(&secret, "msg_1", &timestamp, body).unwrap();

    let result = verify_webhook_signature(&secret, "msg_1", &timestamp, &signature, body, now);

    assert!(matches!(result, Err(TalentError::Validation(_))));
}

#[test]
fn test_user_created_event_maps_to_sync_request() {
    let event: WebhookEvent = serde_json::from_value(user_created_event()).unwrap();

    let payload = sync_request_from_event(&event).unwrap().unwrap();

    assert_eq!(
        payload,
        SyncUserRequest {
            clerk_id: "user_abc123".to_string(),
            name: "Jane Doe".to_string(),
            // The first address wins when several are on file.
            email: "jane@example.com".to_string(),
            image: Some("https://img.example.com/jane.png".to_string()),
        }
    );
}

#[test]
fn test_blank_names_fall_back_to_the_email() {
    let event: WebhookEvent = serde_json::from_value(json!({
        "type": "user.updated",
        "data": {
            "id": "user_abc123",
            "email_addresses": [{ "email_address": "jane@example.com" }],
            "first_name": null,
            "last_name": null
        }
    }))
    .unwrap();

    let payload = sync_request_from_event(&event).unwrap().unwrap();

    assert_eq!(payload.name, "jane@example.com");
    assert_eq!(payload.image, None);
}

#[test]
fn test_user_event_without_email_is_rejected() {
    let event: WebhookEvent = serde_json::from_value(json!({
        "type": "user.created",
        "data": {
            "id": "user_abc123",
            "email_addresses": [],
            "first_name": "Jane",
            "last_name": "Doe"
        }
    }))
    .unwrap();

    assert!(matches!(
        sync_request_from_event(&event),
        Err(TalentError::Validation(_))
    ));
}

#[test]
fn test_unhandled_event_types_are_ignored() {
    let event: WebhookEvent = serde_json::from_value(json!({
        "type": "session.created",
        "data": { "id": "sess_1", "user_id": "user_abc123" }
    }))
    .unwrap();

    assert!(sync_request_from_event(&event).unwrap().is_none());
}

#[tokio::test]
async fn test_user_created_upserts_exactly_once() {
    let mut ctx = TestContext::new();
    let event: WebhookEvent = serde_json::from_value(user_created_event()).unwrap();

    let expected = SyncUserRequest {
        clerk_id: "user_abc123".to_string(),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        image: Some("https://img.example.com/jane.png".to_string()),
    };

    ctx.user_repo
        .expect_upsert_user()
        .with(predicate::eq(expected))
        .times(1)
        .returning(|payload| {
            Ok(crate::test_utils::db_user(
                &payload.clerk_id,
                &payload.name,
                "candidate",
            ))
        });

    let status = process_event_wrapper(&mut ctx, &event).await.unwrap();
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_email_triggers_no_upsert() {
    let mut ctx = TestContext::new();
    let event: WebhookEvent = serde_json::from_value(json!({
        "type": "user.created",
        "data": { "id": "user_abc123", "email_addresses": [] }
    }))
    .unwrap();

    ctx.user_repo.expect_upsert_user().times(0);

    let result = process_event_wrapper(&mut ctx, &event).await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_handler_rejects_missing_signature_header() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let body = serde_json::to_vec(&user_created_event()).unwrap();
    let mut headers = signed_headers(&test_webhook_secret(), &body);
    headers.remove("svix-signature");

    let result = clerk_webhook(State(state), headers, Bytes::from(body)).await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_handler_rejects_a_bad_signature() {
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let body = serde_json::to_vec(&user_created_event()).unwrap();
    let mut headers = signed_headers(&test_webhook_secret(), &body);
    headers.insert("svix-signature", HeaderValue::from_static("v1,Zm9yZ2VkCg=="));

    let result = clerk_webhook(State(state), headers, Bytes::from(body)).await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_handler_acknowledges_unhandled_events() {
    // A correctly signed delivery of an event type we do not consume is
    // acknowledged without touching persistence.
    let ctx = TestContext::new();
    let state = ctx.build_state();

    let body = serde_json::to_vec(&json!({
        "type": "session.created",
        "data": { "id": "sess_1" }
    }))
    .unwrap();
    let headers = signed_headers(&test_webhook_secret(), &body);

    let status = clerk_webhook(State(state), headers, Bytes::from(body))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
}
