// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use uuid::Uuid;
use vecinal_core::application::{
    ApplicationResult, dto::AuthenticatedUser, error::ApplicationError,
    ports::security::TokenVerifier,
};
use vecinal_core::domain::user::UserId;

pub const TEST_TOKEN: &str = "test-token";
/// Valid token whose subject has no stored user record.
pub const GHOST_TOKEN: &str = "ghost-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

pub fn alice_id() -> UserId {
    UserId::new(Uuid::from_u128(0x6f1c_1d1e_8a63_4d6b_9a8a_2b6b_8f2f_7b10))
}

pub fn ghost_id() -> UserId {
    UserId::new(Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001))
}

#[derive(Clone, Debug, Default)]
pub struct DummyTokenVerifier;

#[async_trait]
impl TokenVerifier for DummyTokenVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let expires_at = Some(super::time::fixed_now() + Duration::hours(1));
        match token {
            TEST_TOKEN => Ok(AuthenticatedUser {
                id: alice_id(),
                email: "alice@example.com".into(),
                expires_at,
            }),
            GHOST_TOKEN => Ok(AuthenticatedUser {
                id: ghost_id(),
                email: "ghost@example.com".into(),
                expires_at,
            }),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("token expired")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
