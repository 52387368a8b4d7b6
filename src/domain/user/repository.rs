use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::User,
    value_objects::{Email, UserId},
};
use async_trait::async_trait;

/// Persistence for users. Implementations hand back fully validated `User`
/// values or `None`, and report I/O failures as `DomainError::Storage`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Inserts the user if its id is unknown, otherwise overwrites it.
    async fn save(&self, user: User) -> DomainResult<User>;

    async fn delete_by_id(&self, id: UserId) -> DomainResult<bool>;

    async fn exists_by_id(&self, id: UserId) -> DomainResult<bool>;
}
