use super::domain::{ComparisonRequest, CriterionInput};
use super::rating::RatingLabel;

pub const DEFAULT_PRODUCTS: [&str; 3] = ["Product A", "Product B", "Product C"];
pub const DEFAULT_CRITERIA: [&str; 3] = ["Price and terms", "Core features", "Extra tools"];
pub const NEW_CRITERION_NAME: &str = "New criterion";

/// One editable criterion row: a name plus an optional rating per product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionRow {
    pub name: String,
    pub ratings: Vec<Option<RatingLabel>>,
}

impl CriterionRow {
    fn unrated(name: impl Into<String>, products: usize) -> Self {
        Self {
            name: name.into(),
            ratings: vec![None; products],
        }
    }
}

/// State behind the desktop form. The product count is fixed for the life of
/// the form; rows are only changed through the methods below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonForm {
    products: Vec<String>,
    rows: Vec<CriterionRow>,
}

impl Default for ComparisonForm {
    fn default() -> Self {
        let mut form = Self::new(DEFAULT_PRODUCTS.iter().map(|name| name.to_string()).collect());
        for name in DEFAULT_CRITERIA {
            form.add_criterion(name);
        }
        form
    }
}

impl ComparisonForm {
    pub fn new(products: Vec<String>) -> Self {
        Self {
            products,
            rows: Vec::new(),
        }
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn rows(&self) -> &[CriterionRow] {
        &self.rows
    }

    pub fn rename_product(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.products.get_mut(index) {
            Some(product) => {
                *product = name.into();
                true
            }
            None => false,
        }
    }

    /// Appends an unrated row and returns its index.
    pub fn add_criterion(&mut self, name: impl Into<String>) -> usize {
        self.rows
            .push(CriterionRow::unrated(name, self.products.len()));
        self.rows.len() - 1
    }

    pub fn remove_criterion(&mut self, index: usize) -> Option<CriterionRow> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    pub fn rename_criterion(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn set_rating(
        &mut self,
        row: usize,
        product: usize,
        rating: Option<RatingLabel>,
    ) -> bool {
        match self
            .rows
            .get_mut(row)
            .and_then(|row| row.ratings.get_mut(product))
        {
            Some(slot) => {
                *slot = rating;
                true
            }
            None => false,
        }
    }

    /// Steps a cell through unrated, then the scale from best to worst, then
    /// back to unrated. Returns the new value.
    pub fn cycle_rating(&mut self, row: usize, product: usize) -> Option<RatingLabel> {
        let current = self
            .rows
            .get(row)
            .and_then(|row| row.ratings.get(product))
            .copied()
            .flatten();
        let next = match current {
            None => Some(RatingLabel::ALL[0]),
            Some(rating) => RatingLabel::ALL
                .iter()
                .position(|candidate| *candidate == rating)
                .and_then(|position| RatingLabel::ALL.get(position + 1))
                .copied(),
        };
        self.set_rating(row, product, next);
        next
    }

    pub fn can_generate(&self) -> bool {
        !self.products.is_empty() && !self.rows.is_empty()
    }

    pub fn to_request(&self) -> ComparisonRequest {
        let criteria = self
            .rows
            .iter()
            .map(|row| CriterionInput {
                name: row.name.clone(),
                ratings: row
                    .ratings
                    .iter()
                    .map(|rating| rating.map(RatingLabel::label).unwrap_or_default().to_string())
                    .collect(),
            })
            .collect();

        ComparisonRequest::new(self.products.clone(), criteria)
    }
}
