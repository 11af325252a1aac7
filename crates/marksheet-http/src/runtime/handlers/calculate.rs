//! Result calculation endpoint.
//!
//! Accepts the raw key-value parameters from either a URL query string
//! (GET) or a form-encoded body (POST), decodes them through one shared
//! policy, and replies with the computed result summary.

use axum::{
    extract::{Form, Query},
    http::StatusCode,
    response::Json,
};
use marksheet_core::{Mark, MarkError, ResultSummary, Subject, SubjectMarks};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::runtime::error::ApiError;

/// Raw parameters accepted by the calculate endpoint.
///
/// Every field arrives as a string on the wire. Numeric decoding happens in
/// [`decode_marks`] so query and form requests share one policy: a missing
/// or blank mark scores zero, anything else must be an integer in [0, 100].
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct CalculateRequest {
    /// Student name, echoed back verbatim.
    pub name: Option<String>,
    /// Roll number, echoed back verbatim.
    pub roll: Option<String>,
    /// Mathematics mark (0-100).
    pub math: Option<String>,
    /// Physics mark (0-100).
    pub physics: Option<String>,
    /// Chemistry mark (0-100).
    pub chemistry: Option<String>,
    /// English mark (0-100).
    pub english: Option<String>,
    /// Computer Science mark (0-100).
    pub cs: Option<String>,
}

/// GET /api/calculate - parameters from the query string
#[utoipa::path(
    get,
    path = "/api/calculate",
    params(CalculateRequest),
    responses(
        (status = 200, description = "Computed result summary", body = serde_json::Value),
        (status = 500, description = "Mark failed to decode or validate", body = crate::runtime::error::ErrorBody)
    )
)]
pub async fn calculate_query(
    Query(params): Query<CalculateRequest>,
) -> Result<Json<ResultSummary>, ApiError> {
    calculate(params)
}

/// POST /api/calculate - parameters from a form-encoded body
#[utoipa::path(
    post,
    path = "/api/calculate",
    request_body(
        content = CalculateRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Computed result summary", body = serde_json::Value),
        (status = 500, description = "Mark failed to decode or validate", body = crate::runtime::error::ErrorBody)
    )
)]
pub async fn calculate_form(
    Form(params): Form<CalculateRequest>,
) -> Result<Json<ResultSummary>, ApiError> {
    calculate(params)
}

/// OPTIONS /api/calculate - CORS preflight
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn calculate(params: CalculateRequest) -> Result<Json<ResultSummary>, ApiError> {
    let name = params.name.as_deref().unwrap_or("").trim().to_string();
    let roll = params.roll.as_deref().unwrap_or("").trim().to_string();

    let marks = decode_marks(&params)?;
    let summary = ResultSummary::compute(name, roll, marks);

    tracing::debug!(total = summary.total, grade = %summary.grade, "computed result");

    Ok(Json(summary))
}

/// Build validated marks from the raw request fields.
fn decode_marks(params: &CalculateRequest) -> Result<SubjectMarks, MarkError> {
    Ok(SubjectMarks::new(
        Mark::from_raw(Subject::Mathematics, params.math.as_deref())?,
        Mark::from_raw(Subject::Physics, params.physics.as_deref())?,
        Mark::from_raw(Subject::Chemistry, params.chemistry.as_deref())?,
        Mark::from_raw(Subject::English, params.english.as_deref())?,
        Mark::from_raw(Subject::ComputerScience, params.cs.as_deref())?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use marksheet_core::Grade;

    fn request(math: &str, physics: &str, chemistry: &str, english: &str, cs: &str) -> CalculateRequest {
        CalculateRequest {
            name: Some("Alex".to_string()),
            roll: Some("1".to_string()),
            math: Some(math.to_string()),
            physics: Some(physics.to_string()),
            chemistry: Some(chemistry.to_string()),
            english: Some(english.to_string()),
            cs: Some(cs.to_string()),
        }
    }

    #[test]
    fn decodes_all_marks() {
        let marks = decode_marks(&request("90", "85", "88", "78", "92")).unwrap();
        assert_eq!(marks.total(), 433);
    }

    #[test]
    fn missing_fields_score_zero() {
        let marks = decode_marks(&CalculateRequest::default()).unwrap();
        assert_eq!(marks.total(), 0);
    }

    #[test]
    fn rejects_out_of_range_marks() {
        let err = decode_marks(&request("101", "85", "88", "78", "92")).unwrap_err();
        assert!(matches!(err, MarkError::OutOfRange { value: 101, .. }));
    }

    #[test]
    fn rejects_non_numeric_marks() {
        let err = decode_marks(&request("90", "abc", "88", "78", "92")).unwrap_err();
        assert!(matches!(err, MarkError::InvalidFormat { .. }));
    }

    #[test]
    fn computes_summary_with_trimmed_display_fields() {
        let mut params = request("40", "40", "40", "40", "40");
        params.name = Some("  Alex  ".to_string());

        let Json(summary) = calculate(params).unwrap();
        assert_eq!(summary.name, "Alex");
        assert_eq!(summary.total, 200);
        assert_eq!(summary.grade, Grade::F);
    }
}
