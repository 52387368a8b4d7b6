// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use vecinal_core::domain::errors::{DomainError, DomainResult};
use vecinal_core::domain::user::{Email, User, UserId, UserRepository};

/// Map-backed repository that also records every `save` call.
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<UserId, User>>,
    saved: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.users.lock().unwrap();
            for user in users {
                map.insert(user.id(), user);
            }
        }
        repo
    }

    pub fn saved(&self) -> Vec<User> {
        self.saved.lock().unwrap().clone()
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let map = self.users.lock().unwrap();
        Ok(map.values().find(|u| u.email() == email).cloned())
    }

    async fn save(&self, user: User) -> DomainResult<User> {
        let mut map = self.users.lock().unwrap();
        let taken = map
            .values()
            .any(|other| other.email() == user.email() && other.id() != user.id());
        if taken {
            return Err(DomainError::UserAlreadyExists(user.email().to_string()));
        }

        // created_at of an existing row is never overwritten.
        let stored = match map.get(&user.id()) {
            Some(existing) => User::new(
                user.id(),
                user.email().as_str(),
                user.profile().clone(),
                existing.created_at(),
                user.updated_at(),
            )?,
            None => user,
        };

        map.insert(stored.id(), stored.clone());
        self.saved.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: UserId) -> DomainResult<bool> {
        Ok(self.users.lock().unwrap().remove(&id).is_some())
    }

    async fn exists_by_id(&self, id: UserId) -> DomainResult<bool> {
        Ok(self.users.lock().unwrap().contains_key(&id))
    }
}

/// Repository whose every call fails as if the database were unreachable.
pub struct FailingUserRepo;

fn unreachable_db<T>() -> DomainResult<T> {
    Err(DomainError::Storage("connection refused".into()))
}

#[async_trait]
impl UserRepository for FailingUserRepo {
    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        unreachable_db()
    }

    async fn find_by_email(&self, _email: &Email) -> DomainResult<Option<User>> {
        unreachable_db()
    }

    async fn save(&self, _user: User) -> DomainResult<User> {
        unreachable_db()
    }

    async fn delete_by_id(&self, _id: UserId) -> DomainResult<bool> {
        unreachable_db()
    }

    async fn exists_by_id(&self, _id: UserId) -> DomainResult<bool> {
        unreachable_db()
    }
}
