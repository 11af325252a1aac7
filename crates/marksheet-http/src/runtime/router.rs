//! HTTP router assembly.
//!
//! Route order matters: the API and probe routes are registered first, and
//! everything unmatched falls through to the static frontend.

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::runtime::{
    HttpRuntime,
    docs::openapi_spec,
    handlers::{calculate_form, calculate_query, health_check, preflight},
    static_files::static_site,
};

impl HttpRuntime {
    /// Build the axum router with all routes and middleware.
    pub fn router(&self) -> Router {
        let config = self.config();

        let mut router = Router::new()
            .route(
                "/api/calculate",
                get(calculate_query)
                    .post(calculate_form)
                    .options(preflight),
            )
            .route("/health", get(health_check));

        if config.enable_openapi {
            router = router.route("/api-docs/openapi.json", get(openapi_spec));
        }

        let mut router = router
            .fallback_service(static_site(&config.static_dir))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            )));

        if config.enable_cors {
            router = router.layer(cors_layer());
        }

        router
    }
}

/// CORS policy: any origin, the calculate methods, and the Content-Type
/// header the frontend sends.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
