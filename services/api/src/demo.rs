use crate::infra::{parse_date, pdf_service, report_date};
use chrono::NaiveDate;
use clap::Args;
use scorecard::comparison::{
    Comparison, ComparisonError, ComparisonRequest, ComparisonService, CriterionInput,
    CsvMatrixImporter,
};
use scorecard::config::AppConfig;
use scorecard::error::AppError;
use scorecard::report::ReportRenderer;
use scorecard::telemetry;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// JSON comparison request (`produtos`/`criterios` or `products`/`criteria`)
    #[arg(long, conflicts_with = "csv", required_unless_present = "csv")]
    pub(crate) input: Option<PathBuf>,
    /// CSV rating matrix: `Criterion,<product>...` header, one row per criterion
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Write the PDF report to this path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Print the comparison as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
    /// Date printed on the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Where to write the sample report (defaults to APP_REPORT_PATH)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Date printed on the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let CompareArgs {
        input,
        csv,
        output,
        json,
        date,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let request = load_request(input.as_deref(), csv.as_deref())?;
    let service = pdf_service(&config.report);

    let comparison = match &output {
        Some(path) => {
            service
                .write_report(&request, report_date(date), path)?
                .comparison
        }
        None => service.score(&request)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        render_comparison(&comparison);
        if let Some(path) = output {
            println!("\nReport written to {}", path.display());
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { output, date } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let output = output.unwrap_or_else(|| config.report.output_path.clone());
    let service = pdf_service(&config.report);

    println!("Product comparison demo");
    write_sample(&service, &output, report_date(date))
}

/// Scores the sample request, writes its report to `output` and prints the summary.
pub(crate) fn write_sample<R: ReportRenderer>(
    service: &ComparisonService<R>,
    output: &Path,
    date: NaiveDate,
) -> Result<(), AppError> {
    let report = service.write_report(&sample_request(), date, output)?;
    render_comparison(&report.comparison);
    println!(
        "\nSample report written to {} ({} bytes)",
        output.display(),
        report.bytes.len()
    );

    Ok(())
}

fn load_request(input: Option<&Path>, csv: Option<&Path>) -> Result<ComparisonRequest, AppError> {
    match (input, csv) {
        (Some(path), _) => {
            let reader = BufReader::new(File::open(path)?);
            Ok(serde_json::from_reader(reader)?)
        }
        (None, Some(path)) => Ok(CsvMatrixImporter::from_path(path)?),
        (None, None) => Err(ComparisonError::InsufficientInput(
            "provide a JSON request or a CSV rating matrix",
        )
        .into()),
    }
}

/// Three products rated on five criteria; the first two end up tied.
pub(crate) fn sample_request() -> ComparisonRequest {
    let products = vec![
        "Atlas Suite".to_string(),
        "Beacon AI".to_string(),
        "Cedar Pro".to_string(),
    ];
    let criteria = vec![
        CriterionInput::new("Price and terms", ["Excellent", "Good", "Fair"]),
        CriterionInput::new("Text features", ["Good", "Excellent", "Fair"]),
        CriterionInput::new("Other models and tools", ["Fair", "Good", "Excellent"]),
        CriterionInput::new("Credits", ["Excellent", "Fair", "Good"]),
        CriterionInput::new("Customer support", ["Good", "Excellent", "Fair"]),
    ];
    ComparisonRequest::new(products, criteria)
}

fn render_comparison(comparison: &Comparison) {
    println!("Winner: {}", comparison.winner);

    println!("\nTotals");
    for (product, score) in &comparison.products {
        println!("- {}: {} pts", product, score.total);
    }

    if comparison.criteria.is_empty() {
        println!("\nCriteria: none");
        return;
    }

    println!("\nCriteria breakdown");
    for criterion in &comparison.criteria {
        println!("- {criterion}");
        for product in comparison.products.keys() {
            if let Some(detail) = comparison.detail(product, criterion) {
                println!(
                    "  - {}: {} pts ({})",
                    product, detail.points, detail.label
                );
            }
        }
    }
}
