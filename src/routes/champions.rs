//! Champion routes

use axum::{routing::get, Router};

use crate::handlers::champions;
use crate::state::AppState;

/// Create champion routes (token-guarded via the extractor)
pub fn champion_routes() -> Router<AppState> {
    Router::new()
        .route("/champions", get(champions::list_champions))
        .route("/champions/:name", get(champions::get_champion))
}
