//! # Webhook Verification Module
//!
//! Signature verification for identity-provider webhook deliveries.
//!
//! Deliveries are signed with the svix scheme: the shared secret is a
//! `whsec_`-prefixed base64 key, the signed content is
//! `"{message id}.{timestamp}.{raw body}"`, and the `svix-signature` header
//! carries one or more space-separated `v1,<base64>` candidates. Any
//! matching candidate authenticates the delivery. Comparison is
//! constant-time, and timestamps outside the tolerance window are rejected
//! to fail replayed deliveries closed.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use talentsync_core::errors::{TalentError, TalentResult};

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted clock difference between a delivery's timestamp and the
/// receiving server, in seconds.
pub const TIMESTAMP_TOLERANCE_SECS: i64 = 5 * 60;

/// Verifies a webhook delivery against the shared secret.
///
/// `now` is the receiver's current unix timestamp; passing it explicitly
/// keeps the tolerance check deterministic under test.
///
/// # Errors
///
/// * `TalentError::Validation` - malformed secret, timestamp, or signature,
///   a timestamp outside the tolerance window, or no matching signature
pub fn verify_webhook_signature(
    secret: &str,
    message_id: &str,
    timestamp: &str,
    signature_header: &str,
    payload: &[u8],
    now: i64,
) -> TalentResult<()> {
    let sent_at: i64 = timestamp
        .parse()
        .map_err(|_| TalentError::Validation("Invalid svix-timestamp header".to_string()))?;

    if (now - sent_at).abs() > TIMESTAMP_TOLERANCE_SECS {
        return Err(TalentError::Validation(
            "Webhook timestamp outside tolerance".to_string(),
        ));
    }

    let mac = signed_content_mac(secret, message_id, timestamp, payload)?;

    // The header may carry several candidates, e.g. after a secret rotation.
    for candidate in signature_header.split_ascii_whitespace() {
        let Some(encoded) = candidate.strip_prefix("v1,") else {
            continue;
        };
        let Ok(expected) = BASE64.decode(encoded) else {
            continue;
        };

        // Constant-time comparison
        if mac.clone().verify_slice(&expected).is_ok() {
            return Ok(());
        }
    }

    Err(TalentError::Validation(
        "Webhook signature verification failed".to_string(),
    ))
}

/// Computes the `v1,<base64>` signature for a payload; the counterpart of
/// [`verify_webhook_signature`], used to sign test deliveries.
pub fn sign_webhook_payload(
    secret: &str,
    message_id: &str,
    timestamp: &str,
    payload: &[u8],
) -> TalentResult<String> {
    let mac = signed_content_mac(secret, message_id, timestamp, payload)?;
    let signature = BASE64.encode(mac.finalize().into_bytes());
    Ok(format!("v1,{}", signature))
}

fn signed_content_mac(
    secret: &str,
    message_id: &str,
    timestamp: &str,
    payload: &[u8],
) -> TalentResult<HmacSha256> {
    let key = decode_secret(secret)?;

    let mut mac = HmacSha256::new_from_slice(&key)
        .map_err(|_| TalentError::Validation("Invalid webhook secret".to_string()))?;
    mac.update(message_id.as_bytes());
    mac.update(b".");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(payload);

    Ok(mac)
}

fn decode_secret(secret: &str) -> TalentResult<Vec<u8>> {
    let encoded = secret.strip_prefix("whsec_").unwrap_or(secret);
    BASE64
        .decode(encoded)
        .map_err(|_| TalentError::Validation("Invalid webhook secret".to_string()))
}
