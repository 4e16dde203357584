//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::AuthService;
use crate::ddragon::DataDragonService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub ddragon: Arc<DataDragonService>,
}

impl AppState {
    pub fn new(auth_service: Arc<AuthService>, ddragon: Arc<DataDragonService>) -> Self {
        Self {
            auth_service,
            ddragon,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for Arc<DataDragonService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.ddragon.clone()
    }
}
