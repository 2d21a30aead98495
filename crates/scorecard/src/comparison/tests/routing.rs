use super::common::*;
use axum::extract::State;
use axum::http::{header, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::comparison::router::{report_handler, score_handler};
use crate::comparison::{ComparisonRequest, ComparisonService};

#[tokio::test]
async fn score_handler_returns_totals_and_winner() {
    let (service, _) = build_service();

    let response = score_handler::<MemoryRenderer>(
        State(Arc::new(service)),
        Ok(axum::Json(request())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["products"]["P1"]["total"], 13);
    assert_eq!(payload["products"]["P2"]["total"], 15);
    assert_eq!(payload["products"]["P1"]["criteria"]["Price"]["label"], "Excellent");
    assert_eq!(payload["winner"]["kind"], "single");
    assert_eq!(payload["winner"]["product"], "P2");
    assert_eq!(payload["criteria"], json!(["Price", "Support"]));
}

#[tokio::test]
async fn score_handler_rejects_empty_lists() {
    let (service, _) = build_service();

    let response = score_handler::<MemoryRenderer>(
        State(Arc::new(service)),
        Ok(axum::Json(ComparisonRequest::default())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("insufficient data"));
}

#[tokio::test]
async fn report_handler_returns_internal_error_on_render_failure() {
    let service = Arc::new(ComparisonService::new(Arc::new(FailingRenderer)));

    let response =
        report_handler::<FailingRenderer>(State(service), Ok(axum::Json(request()))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("chart backend offline"));
}

#[tokio::test]
async fn report_route_returns_pdf_attachment() {
    let router = router_with_renderer(MemoryRenderer::default());

    let response = router
        .oneshot(json_request(
            "/api/v1/comparison/report",
            json!({
                "produtos": ["P1", "P2"],
                "criterios": [
                    {"nome": "Price", "pontuacoes": ["Excellent", "Good"]},
                    {"nome": "   ", "pontuacoes": ["Excellent", "Excellent"]}
                ]
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"product_comparison.pdf\""
    );
    assert_eq!(read_body(response).await, FAKE_PDF);
}

#[tokio::test]
async fn report_route_rejects_empty_criteria() {
    let router = router_with_renderer(MemoryRenderer::default());

    let response = router
        .oneshot(json_request(
            "/api/v1/comparison/report",
            json!({ "produtos": ["P1"], "criterios": [] }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ratings_route_lists_the_scale() {
    let router = router_with_renderer(MemoryRenderer::default());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/ratings")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["label"], "Excellent");
    assert_eq!(payload[0]["points"], 10);
    assert_eq!(payload.as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn malformed_json_gets_a_json_error_body() {
    let router = router_with_renderer(MemoryRenderer::default());

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/comparison/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{not json"))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("JSON"));
}

#[tokio::test]
async fn missing_content_type_gets_a_json_error_body() {
    let router = router_with_renderer(MemoryRenderer::default());

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/comparison/report")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&request()).expect("serializable body"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("Content-Type: application/json"));
}
