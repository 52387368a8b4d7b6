// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    profile::Profile,
    value_objects::{Email, UserId},
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: Email,
    profile: Profile,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Builds a user, validating the email. The profile is already valid by
    /// construction, so rows coming back from storage go through the same
    /// checks as fresh input.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        profile: Profile,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            email: Email::new(email)?,
            profile,
            created_at,
            updated_at,
        })
    }

    pub fn with_updated_profile(&self, profile: Profile, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            email: self.email.clone(),
            profile,
            created_at: self.created_at,
            updated_at: now,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
