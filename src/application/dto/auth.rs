use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Caller identity extracted from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub expires_at: Option<DateTime<Utc>>,
}
