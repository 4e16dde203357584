//! Authentication models for Riftgate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered user. Created on registration, immutable afterwards,
/// and gone when the process exits; there is no persistence layer.
#[derive(Debug, Clone)]
pub struct Identity {
    pub name: String,
    pub birth_date: NaiveDate,
    pub username: String,
    pub password_hash: String,
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Request body for POST /register
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    pub username: String,
    pub password: String,
}

/// Request body for POST /login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response carrying a freshly issued session token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Generic confirmation message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
