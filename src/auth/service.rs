//! Authentication service
//!
//! Registration and login over the in-memory user store. Password hashing
//! and verification run on the blocking pool so a bcrypt round never pins
//! a runtime worker.

use thiserror::Error;

use crate::models::{Identity, RegisterRequest};
use crate::store::UserStore;

use super::jwt::{issue_token, JwtError};
use super::validate;

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("name must include at least a first and a last name")]
    InvalidName,

    #[error("birth date is not a valid calendar date")]
    InvalidDate,

    #[error("username is not a valid email address")]
    InvalidUsername,

    #[error("password does not meet the strength requirements")]
    WeakPassword,

    #[error("user already registered")]
    UserExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Token(#[from] JwtError),
}

/// Authentication service
pub struct AuthService {
    store: UserStore,
    jwt_secret: String,
    token_ttl_seconds: i64,
    bcrypt_cost: u32,
}

impl AuthService {
    /// Create a new AuthService with an empty user store
    pub fn new(jwt_secret: String, token_ttl_seconds: i64, bcrypt_cost: u32) -> Self {
        Self {
            store: UserStore::new(),
            jwt_secret,
            token_ttl_seconds,
            bcrypt_cost,
        }
    }

    /// Signing secret, shared with the token guard
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Register a new identity
    ///
    /// The validators run in a fixed order (name, birth date, username,
    /// password) and the first failure wins. No token is issued on success;
    /// the client is expected to log in next.
    pub async fn register(&self, request: RegisterRequest) -> Result<(), AuthError> {
        if !validate::is_full_name(&request.name) {
            return Err(AuthError::InvalidName);
        }
        let birth_date =
            validate::parse_birth_date(&request.birth_date).ok_or(AuthError::InvalidDate)?;
        if !validate::is_valid_email(&request.username) {
            return Err(AuthError::InvalidUsername);
        }
        if !validate::is_strong_password(&request.password) {
            return Err(AuthError::WeakPassword);
        }

        // Known duplicates are rejected before hashing; the atomic insert
        // below still enforces uniqueness under concurrency.
        if self.store.find(&request.username).await.is_some() {
            return Err(AuthError::UserExists);
        }

        let cost = self.bcrypt_cost;
        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        let identity = Identity {
            name: request.name,
            birth_date,
            username: request.username,
            password_hash,
        };

        self.store
            .insert_if_absent(identity)
            .await
            .map_err(|_| AuthError::UserExists)
    }

    /// Authenticate a user and issue a session token
    ///
    /// An unknown username and a wrong password produce the same error so
    /// the response never reveals which of the two was wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if !validate::is_valid_email(username) {
            return Err(AuthError::InvalidUsername);
        }

        let Some(identity) = self.store.find(username).await else {
            return Err(AuthError::InvalidCredentials);
        };

        let password = password.to_string();
        let hash = identity.password_hash;
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(issue_token(username, &self.jwt_secret, self.token_ttl_seconds)?)
    }
}
