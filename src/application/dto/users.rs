use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full profile view, returned to the owner of the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        let profile = user.profile();
        Self {
            id: user.id().to_string(),
            email: user.email().to_string(),
            display_name: profile.display_name().map(str::to_owned),
            photo_url: profile.photo_url().map(str::to_owned),
            phone_number: profile.phone_number().map(str::to_owned),
            address: profile.address().map(str::to_owned),
            bio: profile.bio().map(str::to_owned),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Limited view of someone else's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileDto {
    pub id: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
}

impl From<&User> for PublicProfileDto {
    fn from(user: &User) -> Self {
        let profile = user.profile();
        Self {
            id: user.id().to_string(),
            display_name: profile.display_name().map(str::to_owned),
            photo_url: profile.photo_url().map(str::to_owned),
            bio: profile.bio().map(str::to_owned),
        }
    }
}

impl From<User> for PublicProfileDto {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
