//! Read-only decoding of session token payloads.
//!
//! Tokens are JWTs signed by the server. The client only reads the payload to
//! show who is logged in; it never verifies the signature, so nothing here is
//! an authentication boundary.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenDecodeError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid claims JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the claims carried by `token` without verifying its signature.
///
/// # Errors
///
/// Returns an error if the token does not have three segments or the payload
/// is not base64url-encoded JSON with a `name` claim.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenDecodeError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenDecodeError::Malformed);
    };
    // Some issuers keep the padding on the payload segment.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Claims of `token`, or `None` (with a warning) if they cannot be read.
#[must_use]
pub fn read_claims(token: &str) -> Option<TokenClaims> {
    match decode_claims(token) {
        Ok(claims) => Some(claims),
        Err(err) => {
            log::warn!("Error decoding token: {err}");
            None
        }
    }
}

/// Display name from the token's `name` claim, or `None` if it cannot be read.
#[must_use]
pub fn decode_display_name(token: &str) -> Option<String> {
    read_claims(token).map(|claims| claims.name)
}

#[cfg(test)]
pub(crate) fn encode_test_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_name_comes_from_name_claim() {
        let token = encode_test_token(&json!({"name": "Jane", "username": "x@y.com"}));
        assert_eq!(decode_display_name(&token).as_deref(), Some("Jane"));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.username.as_deref(), Some("x@y.com"));
    }

    #[test]
    fn padded_payload_is_accepted() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(br#"{"name":"Al"}"#);
        let token = format!("h.{payload}.s");
        assert_eq!(decode_display_name(&token).as_deref(), Some("Al"));
    }

    #[test]
    fn malformed_tokens_yield_none() {
        assert!(decode_display_name("not-a-jwt").is_none());
        assert!(decode_display_name("a.b.c.d").is_none());
        assert!(read_claims("a.!!!.c").is_none());
        let no_name = encode_test_token(&json!({"sub": "42"}));
        assert!(read_claims(&no_name).is_none());
    }

    #[test]
    fn malformed_error_is_reported() {
        assert!(matches!(
            decode_claims("only.two"),
            Err(TokenDecodeError::Malformed)
        ));
    }
}
