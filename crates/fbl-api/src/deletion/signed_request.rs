//! The provider's signed-request envelope: `base64url(signature).base64url(json)`.
//!
//! Parsing and signature verification are separate steps so the webhook can
//! run in both the verified and the legacy unverified configuration, and so
//! tests can exercise forged envelopes without any network.

use base64::{Engine as _, engine::general_purpose};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::error::ApiError;

type HmacSha256 = Hmac<Sha256>;

/// Payload of a data-deletion request. Extra fields the provider sends
/// (`algorithm`, `issued_at`, …) are ignored.
#[derive(Debug, Deserialize)]
pub struct DeletionPayload {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A decoded envelope. Parsing does not make it trustworthy; call
/// [`SignedRequest::verify`] for that.
#[derive(Debug)]
pub struct SignedRequest {
    signature: Vec<u8>,
    raw_payload: String,
    pub payload: DeletionPayload,
}

impl SignedRequest {
    /// Split on the `.` separator and decode both halves.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let (signature, payload) = raw
            .split_once('.')
            .ok_or_else(|| ApiError::MalformedSignedRequest("missing separator".to_string()))?;

        let signature = decode_base64(signature).map_err(|e| {
            ApiError::MalformedSignedRequest(format!("undecodable signature: {e}"))
        })?;
        let payload_bytes = decode_base64(payload)
            .map_err(|e| ApiError::MalformedSignedRequest(format!("undecodable payload: {e}")))?;

        let parsed = serde_json::from_slice(&payload_bytes)
            .map_err(|e| ApiError::MalformedSignedRequest(format!("payload is not JSON: {e}")))?;

        Ok(Self {
            signature,
            raw_payload: payload.to_string(),
            payload: parsed,
        })
    }

    /// Check the signature: HMAC-SHA256 of the still-encoded payload, keyed
    /// with the app secret.
    pub fn verify(&self, app_secret: &str) -> Result<(), ApiError> {
        let mut mac = HmacSha256::new_from_slice(app_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(self.raw_payload.as_bytes());
        mac.verify_slice(&self.signature)
            .map_err(|_| ApiError::SignatureMismatch)
    }
}

/// The provider encodes with the URL-safe alphabet and no padding; padded
/// standard-alphabet input is accepted as well since test tooling and older
/// senders produce it.
fn decode_base64(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(input)
        .or_else(|_| general_purpose::STANDARD.decode(input))
}
