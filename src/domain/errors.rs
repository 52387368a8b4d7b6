// src/domain/errors.rs
use crate::domain::user::UserId;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid user data - {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    #[error("user with email {0} already exists")]
    UserAlreadyExists(String),
    #[error("unauthorized to {0}")]
    Unauthorized(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Field name carried by a validation failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
