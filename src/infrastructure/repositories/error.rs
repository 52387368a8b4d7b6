use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";

pub fn is_email_conflict(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.constraint() == Some(CNT_USER_EMAIL))
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return DomainError::Storage(format!(
                    "database constraint violation: {constraint}"
                ));
            }

            DomainError::Storage(db_err.message().to_string())
        }
        _ => DomainError::Storage(err.to_string()),
    }
}
