mod aggregate;
mod domain;
mod form;
mod import;
mod rating;
mod router;
mod service;

pub use aggregate::{aggregate, Comparison, CriterionScore, ProductScore, Winner};
pub use domain::{ComparisonError, ComparisonRequest, CriterionInput};
pub use form::{
    ComparisonForm, CriterionRow, DEFAULT_CRITERIA, DEFAULT_PRODUCTS, NEW_CRITERION_NAME,
};
pub use import::{CsvMatrixImporter, ImportError};
pub use rating::{points_for, scale, RatingLabel, ScaleEntry, UNRATED_LABEL};
pub use router::comparison_router;
pub use service::{ComparisonService, RenderedReport, WriteReportError};

#[cfg(test)]
mod tests;
