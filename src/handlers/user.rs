use axum::{
    extract::{FromRequestParts, Query, State},
    http::{request::Parts, StatusCode},
    Json,
};

use crate::error::ServerError;
use crate::handlers::{JsonBody, UserId};
use crate::models::User;
use crate::server::AppState;

/// The query string of `GET /user/`. Absent parameters mean "no filter"; when a parameter is
/// repeated, the first value wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct UserFilterQuery {
    pub(crate) name: String,
    /// Parsed as a boolean by the repository.
    pub(crate) status: String,
}

impl<S> FromRequestParts<S> for UserFilterQuery
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ServerError::Validation(e.body_text()))?;

        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };

        Ok(UserFilterQuery {
            name: first("name"),
            status: first("status"),
        })
    }
}

/// Handler for `POST /user/`
pub(crate) async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<User>,
) -> Result<(StatusCode, Json<User>), ServerError> {
    tracing::info!(name = %user.name, status = user.status, "creating user");

    let user = state.users.create(user).await?;

    tracing::info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Handler for `GET /user/{id}`
pub(crate) async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ServerError> {
    tracing::info!(user_id = id, "fetching user");

    Ok(Json(state.users.get_by_id(id).await?))
}

/// Handler for `GET /user/`
pub(crate) async fn list_users(
    State(state): State<AppState>,
    query: UserFilterQuery,
) -> Result<Json<Vec<User>>, ServerError> {
    tracing::info!(name = %query.name, status = %query.status, "listing users");

    let users = state
        .users
        .get_by_filter(&query.name, &query.status)
        .await?;
    Ok(Json(users))
}

/// Handler for `PUT /user/{id}`
///
/// Any `id` in the body is ignored; the response always carries the one from the path.
pub(crate) async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(mut user): JsonBody<User>,
) -> Result<Json<User>, ServerError> {
    tracing::info!(user_id = id, "updating user");

    state.users.update(id, &user).await?;

    user.id = id;
    Ok(Json(user))
}

/// Handler for `DELETE /user/{id}`
pub(crate) async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<StatusCode, ServerError> {
    tracing::info!(user_id = id, "deleting user");

    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
