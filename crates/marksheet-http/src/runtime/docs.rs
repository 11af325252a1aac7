//! OpenAPI document for the result API.

use axum::response::Json;
use utoipa::OpenApi;

use crate::runtime::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marksheet API",
        description = "Computes a student's total, percentage, and grade from five subject marks."
    ),
    paths(
        handlers::calculate::calculate_query,
        handlers::calculate::calculate_form,
        handlers::health::health_check,
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json - the generated OpenAPI document
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
