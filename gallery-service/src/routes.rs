use axum::{
    extract::DefaultBodyLimit,
    routing::{any, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::handlers;
use crate::AppState;

/// Wire the gallery listing, the upload endpoint and the static asset tree.
///
/// Anything not matched by `/gallery` or `/upload` is looked up under
/// `assets_dir`, so `/` serves `assets/index.html`.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/gallery", any(handlers::list_paintings))
        .route(
            "/upload",
            post(handlers::upload_painting)
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .fallback_service(ServeDir::new(&config.assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
