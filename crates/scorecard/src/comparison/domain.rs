use serde::{Deserialize, Serialize};

/// One criterion row as submitted by a front end: a free-text name plus one
/// raw rating label per product, in product order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionInput {
    #[serde(default, alias = "nome")]
    pub name: String,
    #[serde(default, alias = "pontuacoes")]
    pub ratings: Vec<String>,
}

impl CriterionInput {
    pub fn new<N, I, S>(name: N, ratings: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ratings: ratings.into_iter().map(Into::into).collect(),
        }
    }
}

/// Payload accepted by every front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    #[serde(default, alias = "produtos")]
    pub products: Vec<String>,
    #[serde(default, alias = "criterios")]
    pub criteria: Vec<CriterionInput>,
}

impl ComparisonRequest {
    pub fn new(products: Vec<String>, criteria: Vec<CriterionInput>) -> Self {
        Self { products, criteria }
    }

    pub fn validate(&self) -> Result<(), ComparisonError> {
        if self.products.is_empty() {
            return Err(ComparisonError::InsufficientInput(
                "at least one product is required",
            ));
        }
        if self.criteria.is_empty() {
            return Err(ComparisonError::InsufficientInput(
                "at least one criterion is required",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error("insufficient data: {0}")]
    InsufficientInput(&'static str),
    #[error("unable to render report: {0}")]
    Rendering(#[from] crate::report::RenderError),
}
