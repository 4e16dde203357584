//! Middleware for the Riftgate API
//!
//! Request logging and the bearer-token guard protecting the champion
//! endpoints.

pub mod auth;
mod request_log;

pub use auth::AuthenticatedUser;
pub use request_log::request_log;
