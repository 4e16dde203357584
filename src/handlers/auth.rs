//! Authentication HTTP handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::error::ApiError;
use crate::models::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse};
use crate::state::AppState;

/// POST /register - Create a new identity
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.auth_service.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// POST /login - Verify credentials and issue a session token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}
