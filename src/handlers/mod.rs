//! API handlers for Riftgate

pub mod auth;
pub mod champions;

pub use auth::*;
pub use champions::*;

// Re-export AuthenticatedUser from middleware for handler use
pub use crate::middleware::auth::AuthenticatedUser;
