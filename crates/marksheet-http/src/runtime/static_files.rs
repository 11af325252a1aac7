//! Static frontend service.
//!
//! Serves the frontend assets with `/` resolving to `index.html`. Lookups
//! are confined to the configured directory; anything missing, a directory,
//! or escaping the root gets a plain-text 404.

use std::path::Path;

use axum::{Router, handler::HandlerWithoutStateExt, http::StatusCode};
use tower_http::services::ServeDir;

/// Router serving the frontend from `dir`.
pub fn static_site(dir: &Path) -> Router {
    let fallback = not_found.into_service();
    Router::new().fallback_service(ServeDir::new(dir).not_found_service(fallback))
}

/// 404 for paths that do not resolve to a file under the static root.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
