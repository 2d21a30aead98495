//! Product comparison scoring: rate products against free-text criteria on a
//! fixed four-level scale, total the points, pick a winner and render a PDF
//! report with a score table and a bar chart.

pub mod comparison;
pub mod config;
pub mod error;
pub mod report;
pub mod telemetry;
