use super::common::*;
use crate::comparison::{ComparisonError, ComparisonRequest, ComparisonService, Winner};
use crate::report::RenderError;
use chrono::NaiveDate;
use std::sync::Arc;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date")
}

#[test]
fn score_rejects_missing_products() {
    let (service, _) = build_service();
    let request = ComparisonRequest::new(Vec::new(), request().criteria);

    match service.score(&request) {
        Err(ComparisonError::InsufficientInput(message)) => {
            assert!(message.contains("product"));
        }
        other => panic!("expected insufficient input, got {other:?}"),
    }
}

#[test]
fn score_rejects_missing_criteria() {
    let (service, _) = build_service();
    let request = ComparisonRequest::new(request().products, Vec::new());

    assert!(matches!(
        service.score(&request),
        Err(ComparisonError::InsufficientInput(_))
    ));
}

#[test]
fn report_passes_scored_layout_to_renderer() {
    let (service, renderer) = build_service();

    let report = service.report(&request(), today()).expect("report renders");

    assert_eq!(report.bytes, FAKE_PDF);
    assert_eq!(
        report.comparison.winner,
        Winner::Single {
            product: "P2".to_string()
        }
    );
    let layouts = renderer.layouts();
    assert_eq!(layouts.len(), 1);
    assert_eq!(layouts[0].winner_line, "WINNER: P2");
    assert_eq!(layouts[0].generated_on, today());
    assert_eq!(layouts[0].totals, vec!["13 pts", "15 pts"]);
}

#[test]
fn report_does_not_render_invalid_requests() {
    let (service, renderer) = build_service();

    let result = service.report(&ComparisonRequest::default(), today());

    assert!(matches!(result, Err(ComparisonError::InsufficientInput(_))));
    assert!(renderer.layouts().is_empty());
}

#[test]
fn report_surfaces_renderer_failures() {
    let service = ComparisonService::new(Arc::new(FailingRenderer));

    match service.report(&request(), today()) {
        Err(ComparisonError::Rendering(RenderError::Backend(message))) => {
            assert_eq!(message, "chart backend offline");
        }
        other => panic!("expected rendering failure, got {other:?}"),
    }
}

#[test]
fn write_report_persists_bytes() {
    let (service, _) = build_service();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("comparison.pdf");

    service
        .write_report(&request(), today(), &path)
        .expect("report written");

    assert_eq!(std::fs::read(&path).expect("file readable"), FAKE_PDF);
}
