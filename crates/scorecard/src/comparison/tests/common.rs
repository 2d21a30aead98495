use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::comparison::{comparison_router, ComparisonRequest, ComparisonService, CriterionInput};
use crate::report::{RenderError, ReportLayout, ReportRenderer};

pub(super) const FAKE_PDF: &[u8] = b"%PDF-1.3 fake";

pub(super) fn request() -> ComparisonRequest {
    ComparisonRequest::new(
        vec!["P1".to_string(), "P2".to_string()],
        vec![
            CriterionInput::new("Price", ["Excellent", "Good"]),
            CriterionInput::new("Support", ["Fair", "Excellent"]),
        ],
    )
}

#[derive(Default, Clone)]
pub(super) struct MemoryRenderer {
    layouts: Arc<Mutex<Vec<ReportLayout>>>,
}

impl MemoryRenderer {
    pub(super) fn layouts(&self) -> Vec<ReportLayout> {
        self.layouts.lock().expect("renderer mutex poisoned").clone()
    }
}

impl ReportRenderer for MemoryRenderer {
    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, RenderError> {
        self.layouts
            .lock()
            .expect("renderer mutex poisoned")
            .push(layout.clone());
        Ok(FAKE_PDF.to_vec())
    }
}

pub(super) struct FailingRenderer;

impl ReportRenderer for FailingRenderer {
    fn render(&self, _layout: &ReportLayout) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::Backend("chart backend offline".to_string()))
    }
}

pub(super) fn build_service() -> (ComparisonService<MemoryRenderer>, Arc<MemoryRenderer>) {
    let renderer = Arc::new(MemoryRenderer::default());
    (ComparisonService::new(renderer.clone()), renderer)
}

pub(super) fn router_with_renderer<R>(renderer: R) -> axum::Router
where
    R: ReportRenderer + 'static,
{
    comparison_router(Arc::new(ComparisonService::new(Arc::new(renderer))))
}

pub(super) fn json_request(uri: &str, body: Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serializable body"),
        ))
        .expect("request builds")
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body readable")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    serde_json::from_slice(&read_body(response).await).expect("json body")
}
