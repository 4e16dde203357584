//! Riftgate backend library
//!
//! An authenticated gateway over the League of Legends Data Dragon feed:
//! clients register and log in, then fetch champion data enriched with
//! computed image URLs and normalized skins.

pub mod auth;
pub mod config;
pub mod ddragon;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
