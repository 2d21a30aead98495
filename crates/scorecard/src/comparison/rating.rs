use serde::{Deserialize, Serialize};
use std::fmt;

/// Label recorded for a product that was left without a rating.
pub const UNRATED_LABEL: &str = "Not rated";

/// The four-level scale every criterion is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingLabel {
    Excellent,
    Good,
    Fair,
    None,
}

impl RatingLabel {
    /// Highest to lowest, the order used by form dropdowns and the report legend.
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::None];

    pub const fn points(self) -> u32 {
        match self {
            Self::Excellent => 10,
            Self::Good => 5,
            Self::Fair => 3,
            Self::None => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::None => "None",
        }
    }

    /// Exact lookup against the canonical labels; anything else is unrated.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rating| rating.label() == raw)
    }
}

impl fmt::Display for RatingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Points for a raw selection. Anything outside the scale scores zero.
pub fn points_for(raw: &str) -> u32 {
    RatingLabel::parse(raw).map_or(0, RatingLabel::points)
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaleEntry {
    pub rating: RatingLabel,
    pub label: &'static str,
    pub points: u32,
}

pub fn scale() -> Vec<ScaleEntry> {
    RatingLabel::ALL
        .into_iter()
        .map(|rating| ScaleEntry {
            rating,
            label: rating.label(),
            points: rating.points(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_fixed_points() {
        assert_eq!(points_for("Excellent"), 10);
        assert_eq!(points_for("Good"), 5);
        assert_eq!(points_for("Fair"), 3);
        assert_eq!(points_for("None"), 0);
    }

    #[test]
    fn unknown_or_blank_labels_score_zero() {
        assert_eq!(points_for(""), 0);
        assert_eq!(points_for("   "), 0);
        assert_eq!(points_for("Outstanding"), 0);
        assert_eq!(points_for(UNRATED_LABEL), 0);
    }

    #[test]
    fn labels_must_match_exactly() {
        assert_eq!(points_for("excellent"), 0);
        assert_eq!(points_for("EXCELLENT"), 0);
        assert_eq!(points_for(" Good "), 0);
        assert_eq!(RatingLabel::parse("Fair"), Some(RatingLabel::Fair));
        assert_eq!(RatingLabel::parse("fair"), None);
    }

    #[test]
    fn scale_is_strictly_descending() {
        let entries = scale();
        assert_eq!(entries.len(), 4);
        assert!(entries
            .windows(2)
            .all(|pair| pair[0].points > pair[1].points));
        assert_eq!(entries[0].label, "Excellent");
    }
}
