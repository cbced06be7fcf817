//! In-memory [`UserRepository`] used by handler and service tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::filter::Predicate;
use super::{RepoError, RepoResult, UserFilter, UserRepository};
use crate::models::User;

#[derive(Debug, Default)]
pub(crate) struct MemoryUserRepository {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, User>,
}

impl MemoryUserRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

fn matches(predicate: &Predicate, user: &User) -> bool {
    match predicate {
        Predicate::NameContains(name) => user.name.contains(name.as_str()),
        Predicate::StatusEquals(status) => user.status == *status,
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, mut user: User) -> RepoResult<User> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        user.id = inner.last_id;
        inner.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<User> {
        let inner = self.inner.lock().unwrap();
        inner.rows.get(&id).cloned().ok_or(RepoError::NotFound(id))
    }

    async fn get_by_filter(&self, name: &str, status: &str) -> RepoResult<Vec<User>> {
        let filter = UserFilter::parse(name, status)?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .values()
            .filter(|user| filter.predicates().iter().all(|p| matches(p, user)))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, user: &User) -> RepoResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let row = inner.rows.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        row.name = user.name.clone();
        row.status = user.status;
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound(id))
    }
}
