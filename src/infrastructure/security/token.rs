// src/infrastructure/security/token.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenVerifier,
};
use crate::infrastructure::security::claims::AccessClaims;
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};

/// Verifies HS256 access tokens minted by the external identity provider.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &str, issuer: &str, audience: &str) -> ApplicationResult<Self> {
        if secret.is_empty() {
            return Err(ApplicationError::infrastructure("jwt secret must not be empty"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(
            |err| match err.kind() {
                ErrorKind::ExpiredSignature => ApplicationError::unauthorized("token expired"),
                ErrorKind::InvalidIssuer => ApplicationError::unauthorized("invalid token issuer"),
                ErrorKind::InvalidAudience => {
                    ApplicationError::unauthorized("invalid token audience")
                }
                _ => ApplicationError::unauthorized("invalid or expired token"),
            },
        )?;

        data.claims.into_authenticated()
    }
}
