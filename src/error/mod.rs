//! Centralized API error handling for Riftgate
//!
//! This module provides a unified error type for API responses with proper
//! HTTP status code mapping and JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Name must include at least a first and a last name")]
    InvalidName,

    #[error("Invalid birth date, expected YYYY-MM-DD")]
    InvalidDate,

    #[error("Username must be a valid email address")]
    InvalidUsername,

    #[error("Password must be at least 8 characters and include an uppercase letter, a lowercase letter, a digit and a special character")]
    WeakPassword,

    #[error("User already registered")]
    UserExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token not provided")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Champion {0} not found")]
    ChampionNotFound(String),

    #[error("Failed to fetch champion data")]
    UpstreamUnavailable,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in the response
#[derive(Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// Get the error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidName => "INVALID_NAME",
            ApiError::InvalidDate => "INVALID_DATE",
            ApiError::InvalidUsername => "INVALID_USERNAME",
            ApiError::WeakPassword => "WEAK_PASSWORD",
            ApiError::UserExists => "USER_EXISTS",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::MissingToken => "MISSING_TOKEN",
            ApiError::InvalidToken => "INVALID_TOKEN",
            ApiError::ChampionNotFound(_) => "CHAMPION_NOT_FOUND",
            ApiError::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidName
            | ApiError::InvalidDate
            | ApiError::InvalidUsername
            | ApiError::WeakPassword => StatusCode::BAD_REQUEST,
            ApiError::UserExists => StatusCode::CONFLICT,
            ApiError::InvalidCredentials | ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::ChampionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamUnavailable | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        match &self {
            ApiError::UpstreamUnavailable | ApiError::Internal(_) => {
                tracing::error!(error = %message, code = %error_code, "Server error occurred");
            }
            _ => {
                tracing::debug!(error = %message, code = %error_code, "Client error occurred");
            }
        }

        let body = ErrorResponse {
            error: ErrorDetails {
                code: error_code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidName => ApiError::InvalidName,
            AuthError::InvalidDate => ApiError::InvalidDate,
            AuthError::InvalidUsername => ApiError::InvalidUsername,
            AuthError::WeakPassword => ApiError::WeakPassword,
            AuthError::UserExists => ApiError::UserExists,
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::Hashing(e) => ApiError::Internal(e),
            AuthError::Token(e) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;
