// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Claims carried by identity-provider access tokens. Issuer and audience are
/// checked by the decoder, so only the identity claims are kept here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: i64,
}

impl AccessClaims {
    pub fn into_authenticated(self) -> ApplicationResult<AuthenticatedUser> {
        let sub = non_blank(self.sub)
            .ok_or_else(|| ApplicationError::unauthorized("missing subject claim"))?;
        let email = non_blank(self.email)
            .ok_or_else(|| ApplicationError::unauthorized("missing email claim"))?;

        let id: UserId = sub
            .parse()
            .map_err(|_| ApplicationError::unauthorized("subject claim is not a valid user id"))?;

        Ok(AuthenticatedUser {
            id,
            email,
            expires_at: DateTime::from_timestamp(self.exp, 0),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
