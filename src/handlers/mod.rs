use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ServerError;

pub(crate) mod root;
pub(crate) mod user;

pub(crate) use root::*;
pub(crate) use user::*;

/// A JSON request body.
///
/// Unlike `axum::Json` this ignores the `Content-Type` header, and every decoding failure is
/// reported as a 400.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct JsonBody<T>(pub(crate) T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ServerError::InvalidBody(e.body_text()))?;
        let value =
            serde_json::from_slice(&body).map_err(|e| ServerError::InvalidBody(e.to_string()))?;
        Ok(JsonBody(value))
    }
}

/// The `{id}` path segment, parsed as a user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UserId(pub(crate) i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ServerError::InvalidId(e.body_text()))?;

        match raw.parse() {
            Ok(id) => Ok(UserId(id)),
            Err(_) => Err(ServerError::InvalidId(raw)),
        }
    }
}
