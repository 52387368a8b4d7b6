// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Caller resolved from the `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing or malformed Authorization header",
                ))
            })?;

        let user = app_state
            .services
            .token_verifier()
            .authenticate(header.token())
            .await
            .map_err(|err| {
                tracing::debug!(error = %err, "bearer token rejected");
                HttpError::from_error(err)
            })?;

        Ok(Self(user))
    }
}
