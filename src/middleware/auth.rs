//! Token guard
//!
//! Extractor that gates a request on a bearer token: a missing token is a
//! 401, a token that fails verification (bad signature or expired) is a
//! 403. On success the username claim is handed to the handler.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::auth::{verify_token, AuthService};
use crate::error::ApiError;

/// Authenticated caller extracted from a verified session token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Anything that does not parse as `Authorization: Bearer <token>`
        // counts as no token at all.
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingToken.into_response())?;

        let auth_service = Arc::<AuthService>::from_ref(state);

        let claims = verify_token(bearer.token(), auth_service.jwt_secret()).map_err(|err| {
            tracing::debug!(error = %err, "bearer token rejected");
            ApiError::InvalidToken.into_response()
        })?;

        Ok(AuthenticatedUser {
            username: claims.sub,
        })
    }
}
