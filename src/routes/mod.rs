//! Route definitions for the Riftgate API

mod auth;
mod champions;

pub use auth::auth_routes;
pub use champions::champion_routes;
