mod chart;
pub mod layout;
mod pdf;

use std::path::PathBuf;

pub use layout::{ChartBar, ChartSpec, ReportLayout, TableRow};
pub use pdf::{FontSource, PdfReportRenderer};

/// Attachment name used for downloaded reports.
pub const REPORT_FILENAME: &str = "product_comparison.pdf";

/// Turns a finished layout into document bytes.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unable to load font family '{family}' from {}: {source}", dir.display())]
    Fonts {
        family: String,
        dir: PathBuf,
        source: genpdf::error::Error,
    },
    #[error("failed to build PDF document: {0}")]
    Document(#[source] genpdf::error::Error),
    #[error("{0}")]
    Backend(String),
}
