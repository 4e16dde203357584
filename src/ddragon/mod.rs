//! Data Dragon domain module
//!
//! Models for the upstream champion feed and the service that fetches and
//! enriches them with computed image URLs and normalized skins.

mod model;
mod service;

pub use model::*;
pub use service::{DataDragonService, DdragonError};
