use super::domain::CriterionInput;
use super::rating::{RatingLabel, UNRATED_LABEL};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// The rating one product received for one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionScore {
    pub label: String,
    pub points: u32,
}

impl CriterionScore {
    fn from_selection(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
            return Self {
                label: UNRATED_LABEL.to_string(),
                points: 0,
            };
        };

        match RatingLabel::parse(raw) {
            Some(rating) => Self {
                label: rating.label().to_string(),
                points: rating.points(),
            },
            None => Self {
                label: raw.to_string(),
                points: 0,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductScore {
    pub total: u32,
    pub criteria: IndexMap<String, CriterionScore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Winner {
    /// Nothing was compared.
    Undecided,
    Single { product: String },
    Tie { products: Vec<String> },
}

impl Winner {
    pub fn products(&self) -> Vec<&str> {
        match self {
            Self::Undecided => Vec::new(),
            Self::Single { product } => vec![product.as_str()],
            Self::Tie { products } => products.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Undecided => f.write_str("None (nothing to compare)"),
            Winner::Single { product } => f.write_str(product),
            Winner::Tie { products } => match products.split_last() {
                Some((last, rest)) if !rest.is_empty() => {
                    write!(f, "Tie: {} and {}", rest.join(", "), last)
                }
                _ => write!(f, "Tie: {}", products.join(", ")),
            },
        }
    }
}

/// Scores per product plus the winner and the criteria that produced rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub products: IndexMap<String, ProductScore>,
    pub criteria: Vec<String>,
    pub winner: Winner,
}

impl Comparison {
    pub fn total(&self, product: &str) -> Option<u32> {
        self.products.get(product).map(|score| score.total)
    }

    pub fn detail(&self, product: &str, criterion: &str) -> Option<&CriterionScore> {
        self.products
            .get(product)
            .and_then(|score| score.criteria.get(criterion))
    }
}

/// Sums every product's points across the named criteria and picks a winner.
///
/// Products sharing a name share one entry. A criterion whose trimmed name is
/// empty is skipped before scoring. When two criteria trim to the same name,
/// both add to the totals while the detail keeps only the later rating.
pub fn aggregate(products: &[String], criteria: &[CriterionInput]) -> Comparison {
    let mut scores: IndexMap<String, ProductScore> = products
        .iter()
        .map(|product| (product.clone(), ProductScore::default()))
        .collect();
    let mut used = Vec::new();

    for criterion in criteria {
        let name = criterion.name.trim();
        if name.is_empty() {
            continue;
        }
        used.push(name.to_string());

        for (index, product) in products.iter().enumerate() {
            let selection =
                CriterionScore::from_selection(criterion.ratings.get(index).map(String::as_str));
            if let Some(score) = scores.get_mut(product) {
                score.total += selection.points;
                score.criteria.insert(name.to_string(), selection);
            }
        }
    }

    let winner = determine_winner(&scores);
    Comparison {
        products: scores,
        criteria: used,
        winner,
    }
}

fn determine_winner(scores: &IndexMap<String, ProductScore>) -> Winner {
    let Some(best) = scores.values().map(|score| score.total).max() else {
        return Winner::Undecided;
    };

    let mut leaders: Vec<String> = scores
        .iter()
        .filter(|(_, score)| score.total == best)
        .map(|(product, _)| product.clone())
        .collect();

    if leaders.len() == 1 {
        Winner::Single {
            product: leaders.remove(0),
        }
    } else {
        Winner::Tie { products: leaders }
    }
}
