//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The targeted row does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A partial update was requested with nothing to set.
    #[error("no data to update")]
    EmptyUpdate,

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type DbResult<T> = std::result::Result<T, DbError>;
