//! Authentication module for Riftgate
//!
//! Provides email/password authentication:
//! - pure credential validation (name, birth date, username, password)
//! - JWT session token generation and validation
//! - the registration/login service backed by the in-memory user store

pub mod jwt;
mod service;
pub mod validate;

pub use jwt::{issue_token, verify_token, Claims};
pub use service::{AuthError, AuthService};
