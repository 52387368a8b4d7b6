// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser};
use async_trait::async_trait;

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a raw bearer token and resolve the caller it was issued to.
    /// Any rejection is reported as `ApplicationError::Unauthorized`.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
