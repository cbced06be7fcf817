use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::repository::RepoError;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "internal server error";

/// Any possible request errors
#[derive(Debug, Error)]
pub(crate) enum ServerError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("invalid user id: {0:?}")]
    InvalidId(String),

    #[error("{0}")]
    Validation(String),

    #[error("user {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Storage(sqlx::Error),
}

impl From<RepoError> for ServerError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => ServerError::NotFound(id),
            RepoError::Validation(e) => ServerError::Validation(e.to_string()),
            RepoError::Storage(e) => ServerError::Storage(e),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::InvalidBody(_)
            | ServerError::InvalidId(_)
            | ServerError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServerError::NotFound(id) => {
                tracing::debug!(user_id = id, "user not found");
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ServerError::Storage(e) => {
                tracing::error!("database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
