use super::domain::{ComparisonRequest, CriterionInput};
use std::io::Read;
use std::path::Path;

/// Reads a rating matrix: a header of `Criterion,<product>,<product>...`
/// followed by one row per criterion holding a label per product column.
pub struct CsvMatrixImporter;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read rating matrix: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rating matrix CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("rating matrix header must name at least one product after the criterion column")]
    MissingProducts,
}

impl CsvMatrixImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ComparisonRequest, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ComparisonRequest, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let products: Vec<String> = csv_reader
            .headers()?
            .iter()
            .skip(1)
            .map(str::to_string)
            .collect();
        if products.is_empty() {
            return Err(ImportError::MissingProducts);
        }

        let mut criteria = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let mut fields = record.iter();
            let name = fields.next().unwrap_or_default();
            criteria.push(CriterionInput::new(name, fields.take(products.len())));
        }

        Ok(ComparisonRequest::new(products, criteria))
    }
}
