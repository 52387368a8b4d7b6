use super::UserCommandService;
use crate::{
    application::ApplicationResult,
    domain::{
        errors::{DomainError, DomainResult},
        user::{Profile, User, UserId},
    },
};

/// Replacement profile data; absent fields clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfileCommand {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
}

impl UpdateProfileCommand {
    pub fn into_profile(self) -> DomainResult<Profile> {
        Profile::new(
            self.display_name,
            self.photo_url,
            self.phone_number,
            self.address,
            self.bio,
        )
    }
}

impl UserCommandService {
    /// Replaces the profile of `user_id` and persists the result.
    ///
    /// The id is trusted as given: callers pass the authenticated caller's own
    /// id, so no ownership check happens here.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<User> {
        let profile = command.into_profile()?;

        let existing = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let updated = existing.with_updated_profile(profile, self.clock.now());
        let saved = self.user_repo.save(updated).await?;

        tracing::info!(user_id = %user_id, "profile updated");
        Ok(saved)
    }
}
