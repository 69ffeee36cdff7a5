//! Bias-source priority table: five ratings on a 1-5 scale combined into a
//! weighted priority score.
//!
//! Unlike the risk matrix, this scale floors at 1: a missing or unparseable
//! rating normalizes to 1, never 0, so the reachable score range is the
//! closed interval [1.00, 5.00].

pub mod weights;

pub use weights::{PriorityWeights, WeightsError};

use crate::core::{Classification, Score, Severity};
use serde::{Deserialize, Serialize};

/// One editable row of the priority table. Rated fields keep raw text; the
/// worksheet seeds them at `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default = "default_rating")]
    pub severity: String,
    #[serde(default = "default_rating")]
    pub scope: String,
    #[serde(default = "default_rating")]
    pub persistence: String,
    #[serde(default = "default_rating")]
    pub historical: String,
    #[serde(default = "default_rating")]
    pub feasibility: String,
}

fn default_rating() -> String {
    "1".to_string()
}

impl Default for PriorityRow {
    fn default() -> Self {
        Self {
            name: String::new(),
            owner: String::new(),
            severity: default_rating(),
            scope: default_rating(),
            persistence: default_rating(),
            historical: default_rating(),
            feasibility: default_rating(),
        }
    }
}

/// Addressable fields of a [`PriorityRow`] for single-field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityField {
    Name,
    Owner,
    Severity,
    Scope,
    Persistence,
    Historical,
    Feasibility,
}

/// Coerce a raw rating into [1.0, 5.0].
///
/// Unparseable or non-finite input is treated as 0 first, then clamped, so
/// it lands on the floor of 1. Fractional entries survive the clamp.
///
/// ```
/// use fairscore::priority::normalize_rating;
///
/// assert_eq!(normalize_rating("4"), 4.0);
/// assert_eq!(normalize_rating(""), 1.0);
/// assert_eq!(normalize_rating("999"), 5.0);
/// assert_eq!(normalize_rating("2.5"), 2.5);
/// ```
pub fn normalize_rating(raw: &str) -> f64 {
    let n = raw.trim().parse::<f64>().unwrap_or(0.0);
    let n = if n.is_finite() { n } else { 0.0 };
    n.clamp(1.0, 5.0)
}

/// Weighted classifier for [`PriorityRow`]s.
///
/// Holds the immutable weighting policy; construct with
/// [`PriorityClassifier::new`] to swap the policy or use `Default` for the
/// standard 0.30/0.20/0.20/0.20/0.10 split.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityClassifier {
    weights: PriorityWeights,
}

impl PriorityClassifier {
    pub fn new(weights: PriorityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &PriorityWeights {
        &self.weights
    }

    /// Classify a priority row from its current field values.
    ///
    /// Normalizes all five ratings, takes the convex combination, and rounds
    /// to two decimal places before thresholding at 4 and 3.
    pub fn classify(&self, row: &PriorityRow) -> Classification {
        let w = &self.weights;
        let raw = normalize_rating(&row.severity) * w.severity
            + normalize_rating(&row.scope) * w.scope
            + normalize_rating(&row.persistence) * w.persistence
            + normalize_rating(&row.historical) * w.historical
            + normalize_rating(&row.feasibility) * w.feasibility;
        let score = (raw * 100.0).round() / 100.0;

        let (label, severity, action) = if score >= 4.0 {
            ("High", Severity::High, "Mitigate immediately and monitor.")
        } else if score >= 3.0 {
            ("Medium", Severity::Medium, "Plan mitigation and track.")
        } else {
            ("Low", Severity::Low, "Document and observe.")
        };

        Classification {
            score: Score::Weighted(score),
            label,
            severity,
            action,
        }
    }
}
