// src/infrastructure/repositories/postgres_user.rs
use super::{is_email_conflict, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Email, Profile, User, UserId, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const USER_COLUMNS: &str =
    "id, email, display_name, photo_url, phone_number, address, bio, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    display_name: Option<String>,
    photo_url: Option<String>,
    phone_number: Option<String>,
    address: Option<String>,
    bio: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let profile = Profile::new(
            row.display_name,
            row.photo_url,
            row.phone_number,
            row.address,
            row.bio,
        )?;

        User::new(
            UserId::new(row.id),
            row.email,
            profile,
            row.created_at,
            row.updated_at,
        )
    }
}

/// A stored row that no longer passes validation is a storage fault, not a
/// caller error.
fn load_user(row: UserRow) -> DomainResult<User> {
    let id = row.id;
    User::try_from(row).map_err(|err| {
        tracing::error!(user_id = %id, error = %err, "stored user row failed validation");
        DomainError::Storage(format!("corrupt user row {id}: {err}"))
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(load_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(load_user).transpose()
    }

    async fn save(&self, user: User) -> DomainResult<User> {
        let profile = user.profile();

        // created_at is only written on insert.
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users ({USER_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                display_name = EXCLUDED.display_name,
                photo_url = EXCLUDED.photo_url,
                phone_number = EXCLUDED.phone_number,
                address = EXCLUDED.address,
                bio = EXCLUDED.bio,
                updated_at = EXCLUDED.updated_at
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user.id().as_uuid())
        .bind(user.email().as_str())
        .bind(profile.display_name())
        .bind(profile.photo_url())
        .bind(profile.phone_number())
        .bind(profile.address())
        .bind(profile.bio())
        .bind(user.created_at())
        .bind(user.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if is_email_conflict(&err) {
                DomainError::UserAlreadyExists(user.email().to_string())
            } else {
                map_sqlx(err)
            }
        })?;

        load_user(row)
    }

    async fn delete_by_id(&self, id: UserId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
