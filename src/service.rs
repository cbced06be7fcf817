//! User use-case service.
//!
//! Forwards every call to a [`UserRepository`] unchanged, so handlers depend on
//! [`UserService`] rather than on a storage implementation.

use async_trait::async_trait;

use crate::models::User;
use crate::repository::{RepoResult, UserRepository};

/// Operations the HTTP layer can perform on users.
#[async_trait]
pub(crate) trait UserService: Send + Sync {
    async fn create(&self, user: User) -> RepoResult<User>;
    async fn get_by_id(&self, id: i64) -> RepoResult<User>;
    async fn get_by_filter(&self, name: &str, status: &str) -> RepoResult<Vec<User>>;
    async fn update(&self, id: i64, user: &User) -> RepoResult<()>;
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

/// Pass-through [`UserService`] over any repository.
pub(crate) struct DefaultUserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> DefaultUserService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for DefaultUserService<R> {
    async fn create(&self, user: User) -> RepoResult<User> {
        self.repo.create(user).await
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<User> {
        self.repo.get_by_id(id).await
    }

    async fn get_by_filter(&self, name: &str, status: &str) -> RepoResult<Vec<User>> {
        self.repo.get_by_filter(name, status).await
    }

    async fn update(&self, id: i64, user: &User) -> RepoResult<()> {
        self.repo.update(id, user).await
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.repo.delete(id).await
    }
}
