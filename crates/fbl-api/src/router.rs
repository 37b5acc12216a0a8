use std::path::Path;

use axum::{Router, http::StatusCode, routing::get};
use tower_http::services::ServeDir;

use crate::{deletion, facebook, state::ApiState};

/// Assemble the full HTTP surface. Anything the explicit routes don't claim
/// falls through to the static file server over `public_dir`, which answers
/// 404 for unknown paths.
pub fn router(public_dir: &Path) -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(facebook::routes())
        .merge(deletion::routes())
        .fallback_service(ServeDir::new(public_dir))
}

async fn health() -> StatusCode {
    StatusCode::OK
}
