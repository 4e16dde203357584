//! Data models for the Riftgate API

pub mod auth;
pub use auth::*;
