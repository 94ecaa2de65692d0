//! Error handling utilities for repositories

use postoria_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check a unique violation's constraint name, mapping known users-table
/// constraints to their conflict errors
pub fn map_user_unique_violation(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some("users_username_key") => DomainError::UsernameTaken,
                Some("users_email_key") => DomainError::EmailTaken,
                _ => DomainError::DatabaseError(e.to_string()),
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}
