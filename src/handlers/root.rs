use axum::Json;
use serde::Serialize;

/// The response output for `GET /`
#[derive(Debug, Serialize)]
pub(crate) struct RootResponse {
    pub(crate) status: &'static str,
}

/// Handler for `GET /`
pub(crate) async fn root() -> Json<RootResponse> {
    tracing::debug!("root requested");
    Json(RootResponse { status: "ok" })
}
