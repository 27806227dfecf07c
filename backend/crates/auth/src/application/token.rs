//! Session Tokens
//!
//! The cookie value is `<session uuid>.<base64url(HMAC-SHA256(uuid))>`.
//! The signature only proves the token was issued by this server; the
//! session itself lives in the database.

use uuid::Uuid;

use platform::crypto::{constant_time_eq, from_base64_url, hmac_sha256, to_base64_url};

use crate::error::{AuthError, AuthResult};

/// Generate a signed session token
pub fn sign_session_token(session_id: Uuid, secret: &[u8; 32]) -> String {
    let session_id = session_id.to_string();
    let signature = hmac_sha256(secret, session_id.as_bytes());

    format!("{}.{}", session_id, to_base64_url(&signature))
}

/// Parse and verify a session token
pub fn parse_session_token(token: &str, secret: &[u8; 32]) -> AuthResult<Uuid> {
    let Some((session_id_str, signature_b64)) = token.split_once('.') else {
        return Err(AuthError::SessionInvalid);
    };

    let signature = from_base64_url(signature_b64).map_err(|_| AuthError::SessionInvalid)?;
    let expected = hmac_sha256(secret, session_id_str.as_bytes());

    if !constant_time_eq(&signature, &expected) {
        return Err(AuthError::SessionInvalid);
    }

    session_id_str
        .parse()
        .map_err(|_| AuthError::SessionInvalid)
}
