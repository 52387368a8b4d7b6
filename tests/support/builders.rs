// tests/support/builders.rs
use chrono::{DateTime, Utc};
use vecinal_core::domain::user::{Profile, User, UserId};

use super::mocks::{alice_id, fixed_now};

pub struct UserBuilder {
    id: UserId,
    email: String,
    profile: Profile,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserBuilder {
    /// Alice, with an empty profile, created at `fixed_now()`.
    pub fn new() -> Self {
        Self {
            id: alice_id(),
            email: "alice@example.com".into(),
            profile: Profile::empty(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn display_name(mut self, name: &str) -> Self {
        self.profile = Profile::new(
            Some(name.to_string()),
            self.profile.photo_url().map(str::to_owned),
            self.profile.phone_number().map(str::to_owned),
            self.profile.address().map(str::to_owned),
            self.profile.bio().map(str::to_owned),
        )
        .unwrap();
        self
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn build(self) -> User {
        User::new(
            self.id,
            self.email,
            self.profile,
            self.created_at,
            self.updated_at,
        )
        .unwrap()
    }
}
