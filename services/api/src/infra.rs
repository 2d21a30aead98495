use chrono::{Local, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use scorecard::comparison::ComparisonService;
use scorecard::config::ReportConfig;
use scorecard::report::PdfReportRenderer;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn pdf_service(config: &ReportConfig) -> ComparisonService<PdfReportRenderer> {
    let renderer = PdfReportRenderer::new(config.font_source());
    ComparisonService::new(Arc::new(renderer))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn report_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
