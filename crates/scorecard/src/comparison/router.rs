use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::{ComparisonError, ComparisonRequest};
use super::rating::scale;
use super::service::ComparisonService;
use crate::report::{ReportRenderer, REPORT_FILENAME};

/// Router builder exposing the scoring and report endpoints.
pub fn comparison_router<R>(service: Arc<ComparisonService<R>>) -> Router
where
    R: ReportRenderer + 'static,
{
    Router::new()
        .route("/api/v1/ratings", get(ratings_handler))
        .route("/api/v1/comparison/score", post(score_handler::<R>))
        .route("/api/v1/comparison/report", post(report_handler::<R>))
        .with_state(service)
}

pub(crate) async fn ratings_handler() -> Response {
    (StatusCode::OK, Json(scale())).into_response()
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<ComparisonService<R>>>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Response
where
    R: ReportRenderer + 'static,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.score(&request) {
        Ok(comparison) => (StatusCode::OK, Json(comparison)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<ComparisonService<R>>>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Response
where
    R: ReportRenderer + 'static,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.report(&request, Local::now().date_naive()) {
        Ok(report) => {
            let disposition = format!("attachment; filename=\"{REPORT_FILENAME}\"");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime::APPLICATION_PDF.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                report.bytes,
            )
                .into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Body and content-type problems, reported with the same JSON shape as
/// domain errors.
fn rejection_response(rejection: JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
    });
    (rejection.status(), Json(payload)).into_response()
}

fn error_response(err: ComparisonError) -> Response {
    let status = match err {
        ComparisonError::InsufficientInput(_) => StatusCode::BAD_REQUEST,
        ComparisonError::Rendering(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": err.to_string(),
    });
    (status, Json(payload)).into_response()
}
