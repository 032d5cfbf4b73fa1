//! Signed session token encoding and decoding.
//!
//! Token format: `base64url(claims JSON) . base64url(HMAC-SHA256)`, both
//! segments unpadded so the value is cookie-safe. The signature covers the
//! encoded claims segment, so the bearer can neither forge a session nor
//! extend its own expiry. Expiry is not judged here: decoding an expired
//! but well-formed token succeeds, and [`super::SessionValidator`] decides
//! what to do with it.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::domain::foundation::{PrincipalId, Timestamp};

use super::session::Session;

type HmacSha256 = Hmac<Sha256>;

/// Errors produced when a token cannot be decoded.
///
/// All variants mean "this cookie is unusable"; the split exists for
/// diagnostics. None of them is ever shown to a client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Not two dot-separated base64url segments.
    #[error("token structure is malformed")]
    Malformed,

    /// Signature does not match the claims segment.
    #[error("token signature mismatch")]
    BadSignature,

    /// Claims decoded but are not a valid session.
    #[error("token claims are invalid: {0}")]
    InvalidClaims(String),
}

/// Wire shape of the claims segment.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: String,
    #[serde(rename = "issuedAt")]
    issued_at: Timestamp,
    #[serde(rename = "expiresAt")]
    expires_at: Timestamp,
}

/// Encodes sessions into signed, cookie-safe tokens and back.
#[derive(Clone)]
pub struct TokenCodec {
    key: String,
}

impl TokenCodec {
    /// Creates a codec with the given signing key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Encodes a session into its signed token form.
    pub fn encode(&self, session: &Session) -> String {
        let claims = Claims {
            user_id: session.principal_id().as_str().to_string(),
            issued_at: session.issued_at(),
            expires_at: session.expires_at(),
        };
        let json = serde_json::to_string(&claims).expect("claims serialize to JSON");
        let payload = URL_SAFE_NO_PAD.encode(json.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(self.sign(&payload));
        format!("{}.{}", payload, signature)
    }

    /// Decodes and verifies a token.
    ///
    /// # Decoding Steps
    ///
    /// 1. Split into claims and signature segments
    /// 2. Verify the signature over the claims segment (constant-time)
    /// 3. Base64-decode the claims segment
    /// 4. Parse the claims JSON
    /// 5. Rebuild the session, re-checking its invariants
    pub fn decode(&self, token: &str) -> Result<Session, DecodeError> {
        // 1. Split segments
        let (payload, signature) = token.split_once('.').ok_or(DecodeError::Malformed)?;

        // 2. Verify signature before trusting anything in the payload
        let presented = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| DecodeError::Malformed)?;
        let expected = self.sign(payload);
        if !constant_time_compare(&expected, &presented) {
            return Err(DecodeError::BadSignature);
        }

        // 3. Decode claims segment
        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| DecodeError::Malformed)?;

        // 4. Parse claims
        let claims: Claims =
            serde_json::from_slice(&json).map_err(|e| DecodeError::InvalidClaims(e.to_string()))?;

        // 5. Rebuild the session
        let principal_id = PrincipalId::new(claims.user_id)
            .map_err(|e| DecodeError::InvalidClaims(e.to_string()))?;
        Session::new(principal_id, claims.issued_at, claims.expires_at)
            .map_err(|e| DecodeError::InvalidClaims(e.to_string()))
    }

    /// Computes the HMAC-SHA256 signature of an encoded claims segment.
    fn sign(&self, payload: &str) -> Vec<u8> {
        let mut mac =
            HmacSha256::new_from_slice(self.key.as_bytes()).expect("HMAC accepts any key");
        mac.update(payload.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// This prevents timing attacks that could leak information about the
/// expected signature.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
