use crate::comparison::{Comparison, RatingLabel};
use chrono::NaiveDate;
use serde::Serialize;

pub const REPORT_TITLE: &str = "Product Comparison Report";
pub const CRITERIA_HEADER: &str = "CRITERIA";
pub const TOTALS_LABEL: &str = "FINAL SCORE";
pub const CRITERION_TOTAL_HEADER: &str = "TOTAL";
/// Shown under the criterion total column in the final score row.
pub const TOTALS_PLACEHOLDER: &str = "---";
const MISSING_CELL: &str = "0 pts (N/A)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub criterion: String,
    pub cells: Vec<String>,
    /// Points awarded for this criterion summed across all products.
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub y_label: &'static str,
    pub bars: Vec<ChartBar>,
}

impl ChartSpec {
    pub fn max_value(&self) -> u32 {
        self.bars.iter().map(|bar| bar.value).max().unwrap_or(0)
    }
}

/// Everything a renderer needs, already ordered and formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLayout {
    pub title: &'static str,
    pub winner_line: String,
    pub generated_on: NaiveDate,
    pub header: Vec<String>,
    pub rows: Vec<TableRow>,
    pub totals: Vec<String>,
    pub chart: ChartSpec,
    pub scoring_rules: Vec<String>,
}

impl ReportLayout {
    pub fn from_comparison(comparison: &Comparison, generated_on: NaiveDate) -> Self {
        let products: Vec<&String> = comparison.products.keys().collect();

        let header = std::iter::once(CRITERIA_HEADER.to_string())
            .chain(products.iter().map(|product| product.to_string()))
            .chain(std::iter::once(CRITERION_TOTAL_HEADER.to_string()))
            .collect();

        let rows = comparison
            .criteria
            .iter()
            .map(|criterion| {
                let details: Vec<_> = products
                    .iter()
                    .map(|product| comparison.detail(product, criterion))
                    .collect();
                TableRow {
                    criterion: criterion.clone(),
                    cells: details
                        .iter()
                        .map(|detail| match detail {
                            Some(detail) => format!("{} pts ({})", detail.points, detail.label),
                            None => MISSING_CELL.to_string(),
                        })
                        .collect(),
                    total: details
                        .iter()
                        .flatten()
                        .map(|detail| detail.points)
                        .sum::<u32>()
                        .to_string(),
                }
            })
            .collect();

        let totals = comparison
            .products
            .values()
            .map(|score| format!("{} pts", score.total))
            .collect();

        let bars = comparison
            .products
            .iter()
            .map(|(product, score)| ChartBar {
                label: product.clone(),
                value: score.total,
            })
            .collect();

        let scoring_rules = RatingLabel::ALL
            .into_iter()
            .map(|rating| format!("{}: {} points", rating.label(), rating.points()))
            .collect();

        Self {
            title: REPORT_TITLE,
            winner_line: format!("WINNER: {}", comparison.winner),
            generated_on,
            header,
            rows,
            totals,
            chart: ChartSpec {
                title: format!("Total score comparison (Winner: {})", comparison.winner),
                y_label: "Total score",
                bars,
            },
            scoring_rules,
        }
    }
}
