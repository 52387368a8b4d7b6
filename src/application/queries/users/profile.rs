use super::UserQueryService;
use crate::application::{ApplicationResult, dto::PublicProfileDto};
use crate::domain::{
    errors::DomainError,
    user::{User, UserId},
};

impl UserQueryService {
    pub async fn get_profile(&self, user_id: UserId) -> ApplicationResult<User> {
        tracing::debug!(user_id = %user_id, "loading profile");

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(user)
    }

    pub async fn get_public_profile(&self, user_id: UserId) -> ApplicationResult<PublicProfileDto> {
        let user = self.get_profile(user_id).await?;
        Ok(PublicProfileDto::from(&user))
    }
}
