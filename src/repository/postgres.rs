use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{RepoError, RepoResult, UserFilter, UserRepository};
use crate::models::User;

const USER_SELECT_SQL: &str = "SELECT id, name, status FROM users";

/// [`UserRepository`] backed by a Postgres pool
#[derive(Debug, Clone)]
pub(crate) struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, mut user: User) -> RepoResult<User> {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO users (name, status) VALUES ($1, $2) RETURNING id")
                .bind(&user.name)
                .bind(user.status)
                .fetch_one(&self.pool)
                .await?;

        user.id = id;
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<User> {
        sqlx::query_as::<_, User>(r#"SELECT id, name, status FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(id))
    }

    async fn get_by_filter(&self, name: &str, status: &str) -> RepoResult<Vec<User>> {
        let filter = UserFilter::parse(name, status)?;

        let mut builder = QueryBuilder::<Postgres>::new(USER_SELECT_SQL);
        filter.push_where(&mut builder);

        let users = builder
            .build_query_as::<User>()
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn update(&self, id: i64, user: &User) -> RepoResult<()> {
        let result = sqlx::query(r#"UPDATE users SET name = $1, status = $2 WHERE id = $3"#)
            .bind(&user.name)
            .bind(user.status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}
