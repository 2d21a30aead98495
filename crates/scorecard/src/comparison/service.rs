use super::aggregate::{aggregate, Comparison};
use super::domain::{ComparisonError, ComparisonRequest};
use crate::report::{ReportLayout, ReportRenderer};
use chrono::NaiveDate;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug)]
pub struct RenderedReport {
    pub comparison: Comparison,
    pub bytes: Vec<u8>,
}

/// Validates input, scores it and hands the result to a renderer.
pub struct ComparisonService<R> {
    renderer: Arc<R>,
}

impl<R> ComparisonService<R>
where
    R: ReportRenderer,
{
    pub fn new(renderer: Arc<R>) -> Self {
        Self { renderer }
    }

    pub fn score(&self, request: &ComparisonRequest) -> Result<Comparison, ComparisonError> {
        request.validate()?;
        Ok(aggregate(&request.products, &request.criteria))
    }

    pub fn report(
        &self,
        request: &ComparisonRequest,
        generated_on: NaiveDate,
    ) -> Result<RenderedReport, ComparisonError> {
        let comparison = self.score(request)?;
        let layout = ReportLayout::from_comparison(&comparison, generated_on);

        let bytes = self.renderer.render(&layout).map_err(|err| {
            error!(error = %err, "failed to render comparison report");
            ComparisonError::from(err)
        })?;

        info!(
            products = comparison.products.len(),
            criteria = comparison.criteria.len(),
            winner = %comparison.winner,
            bytes = bytes.len(),
            "comparison report rendered"
        );

        Ok(RenderedReport { comparison, bytes })
    }

    /// Renders the report and writes it to `path`, replacing any previous file.
    pub fn write_report<P: AsRef<Path>>(
        &self,
        request: &ComparisonRequest,
        generated_on: NaiveDate,
        path: P,
    ) -> Result<RenderedReport, WriteReportError> {
        let report = self.report(request, generated_on)?;
        std::fs::write(path.as_ref(), &report.bytes)?;
        info!(path = %path.as_ref().display(), "comparison report written");
        Ok(report)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WriteReportError {
    #[error(transparent)]
    Comparison(#[from] ComparisonError),
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
}
