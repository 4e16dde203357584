//! JWT session token generation and validation
//!
//! Tokens are stateless: nothing is stored server-side, and a token stays
//! valid until its expiry regardless of what happens to the process.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT-related errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// Claims carried by a session token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Issue a signed session token for a username
///
/// # Arguments
/// * `username` - the authenticated identity
/// * `secret` - process-wide signing secret
/// * `ttl_seconds` - token time-to-live in seconds
pub fn issue_token(username: &str, secret: &str, ttl_seconds: i64) -> Result<String, JwtError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(ttl_seconds);

    let claims = Claims {
        sub: username.to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| JwtError::EncodingFailed(e.to_string()))
}

/// Verify a session token and return its claims
///
/// Expiry is reported as its own error kind so the caller can log it apart
/// from signature failures; both reject the request.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        _ => JwtError::InvalidToken(e.to_string()),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key";

    #[test]
    fn test_issue_and_verify_round_trip() {
        let token = issue_token("jane@example.com", SECRET, 3600).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "jane@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token("jane@example.com", "secret1", 3600).unwrap();
        let result = verify_token(&token, "secret2");
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let result = verify_token("not.a.token", SECRET);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Issued two hours in the past, well beyond the default leeway.
        let token = issue_token("jane@example.com", SECRET, -7200).unwrap();
        let result = verify_token(&token, SECRET);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }
}
