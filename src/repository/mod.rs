//! User persistence: the repository contract and its implementations.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::User;

pub(crate) mod filter;
#[cfg(test)]
pub(crate) mod memory;
mod postgres;

pub(crate) use filter::{FilterError, UserFilter};
pub(crate) use postgres::PgUserRepository;

pub(crate) type RepoResult<T> = Result<T, RepoError>;

/// Failure kinds of a repository call
#[derive(Debug, Error)]
pub(crate) enum RepoError {
    /// No row matched the identifier.
    #[error("user {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Validation(#[from] FilterError),

    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// CRUD access to the `users` table.
///
/// Every call issues at most one statement. Dropping the returned future cancels it.
#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    /// Insert `user` and return it carrying the generated identifier.
    async fn create(&self, user: User) -> RepoResult<User>;

    async fn get_by_id(&self, id: i64) -> RepoResult<User>;

    /// List users whose name contains `name` and whose status equals `status`. Empty arguments
    /// are ignored; a `status` that is not a boolean fails with [`RepoError::Validation`].
    async fn get_by_filter(&self, name: &str, status: &str) -> RepoResult<Vec<User>>;

    /// Overwrite name and status of the row `id`. The identifier in `user` is ignored.
    async fn update(&self, id: i64, user: &User) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;
}
