use axum::{
    extract::State,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, HOST,
        },
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
};

use crate::error::ApiResult;
use crate::models::PaintingView;
use crate::AppState;

pub const ALLOWED_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";
pub const ALLOWED_HEADERS: &str =
    "Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization";

/// List every stored painting as a JSON array, image bytes base64-encoded.
///
/// Served for any method. The array is empty, not null, when nothing has
/// been uploaded yet.
pub async fn list_paintings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    tracing::info!(host = %host, "Gallery requested");

    let paintings: Vec<PaintingView> = state
        .store
        .find_all()
        .await?
        .into_iter()
        .map(PaintingView::from)
        .collect();

    let body = serde_json::to_vec(&paintings)?;
    tracing::debug!("Serving {} paintings ({} bytes)", paintings.len(), body.len());

    Ok((
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
            (CONTENT_TYPE, "application/json"),
        ],
        body,
    )
        .into_response())
}
