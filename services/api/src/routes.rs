use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Extension;
use axum::Json;
use scorecard::comparison::{comparison_router, ComparisonService};
use scorecard::report::ReportRenderer;
use serde_json::json;
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../assets/index.html");

pub(crate) fn with_comparison_routes<R>(service: Arc<ComparisonService<R>>) -> axum::Router
where
    R: ReportRenderer + 'static,
{
    comparison_router(service)
        .route("/", get(index_page))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use scorecard::report::{RenderError, ReportLayout};
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    struct StubRenderer;

    impl ReportRenderer for StubRenderer {
        fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, RenderError> {
            Ok(format!("%PDF stub {}", layout.winner_line).into_bytes())
        }
    }

    fn app(ready: bool) -> axum::Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let service = Arc::new(ComparisonService::new(Arc::new(StubRenderer)));
        with_comparison_routes(service).layer(Extension(state))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        String::from_utf8(bytes.to_vec()).expect("utf8 body")
    }

    #[tokio::test]
    async fn index_serves_the_comparison_form() {
        let response = app(true)
            .oneshot(Request::get("/").body(Body::empty()).expect("request"))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("/api/v1/comparison/report"));
        assert!(html.contains("/api/v1/ratings"));
    }

    #[tokio::test]
    async fn readiness_reflects_startup_state() {
        let response = app(false)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app(true)
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn report_route_is_mounted_alongside_operational_routes() {
        let payload = json!({
            "produtos": ["P1", "P2"],
            "criterios": [
                { "nome": "Price", "pontuacoes": ["Excellent", "Good"] },
                { "nome": "Support", "pontuacoes": ["Fair", "Excellent"] }
            ]
        });
        let request = Request::post("/api/v1/comparison/report")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request");

        let response = app(true).oneshot(request).await.expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(body_text(response).await, "%PDF stub WINNER: P2");
    }
}
