//! Shared classification vocabulary for both scoring pipelines.
//!
//! A [`Classification`] is always derived from a row's current field values
//! at the moment it is requested. It is never stored alongside the row, so
//! there is no cached copy to go stale when a field changes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete severity tier assigned by threshold comparison on a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computed score on whichever scale the producing classifier uses.
///
/// The risk matrix yields integer point sums; the priority table yields a
/// weighted value rounded to two decimals. A row with no rated values yields
/// `Unscored`, rendered as an em dash.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Score {
    Unscored,
    Points(i64),
    Weighted(f64),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Unscored => f.write_str("\u{2014}"),
            Score::Points(n) => write!(f, "{}", n),
            Score::Weighted(x) => write!(f, "{:.2}", x),
        }
    }
}

/// Derived result of classifying one row: score, label, tier, and the
/// recommended action the hosting layer displays next to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub score: Score,
    pub label: &'static str,
    pub severity: Severity,
    pub action: &'static str,
}
