//! Historical-pattern risk matrix: three ratings on a 0-3 scale summed into
//! a risk priority score.
//!
//! Ratings arrive as raw text from the worksheet inputs. Nothing is rejected
//! at entry time; [`normalize_rating`] coerces whatever was typed into the
//! valid range when a classification is computed.

use crate::core::{Classification, Score, Severity};
use serde::{Deserialize, Serialize};

/// One editable row of the risk matrix. Rated fields keep the raw text the
/// user entered; normalization happens at read time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRow {
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub likelihood: String,
    #[serde(default)]
    pub relevance: String,
    #[serde(default)]
    pub mitigation: String,
}

/// Addressable fields of a [`RiskRow`] for single-field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskField {
    Pattern,
    Impact,
    Likelihood,
    Relevance,
    Mitigation,
}

/// Coerce a raw rating into [0, 3].
///
/// Total over all inputs: empty or non-numeric text yields 0, out-of-range
/// values clamp. Only the leading run of decimal digits (after an optional
/// sign) counts, so a decimal typed into the number input keeps its integer
/// part: `"2.5"` coerces to 2. No error is ever raised for malformed input.
///
/// ```
/// use fairscore::risk::normalize_rating;
///
/// assert_eq!(normalize_rating("2"), 2);
/// assert_eq!(normalize_rating("2.5"), 2);
/// assert_eq!(normalize_rating(""), 0);
/// assert_eq!(normalize_rating("not a number"), 0);
/// assert_eq!(normalize_rating("999"), 3);
/// assert_eq!(normalize_rating("-4"), 0);
/// ```
pub fn normalize_rating(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let run: &str = &digits[..digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len())];
    if run.is_empty() {
        return 0;
    }

    // Runs too long for i64 are already far outside the scale; saturate.
    let magnitude = run.parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };
    value.clamp(0, 3)
}

/// Classify a risk row from its current field values.
///
/// Score is the sum of the three normalized ratings. Thresholds are checked
/// in order, first match wins; a row whose ratings all normalize to 0 is
/// reported as unscored rather than as a zero score. Explicit `"0"` entries
/// and absent entries are indistinguishable here since both normalize to 0.
pub fn classify(row: &RiskRow) -> Classification {
    let impact = normalize_rating(&row.impact);
    let likelihood = normalize_rating(&row.likelihood);
    let relevance = normalize_rating(&row.relevance);

    let score = impact + likelihood + relevance;

    if score == 0 {
        return Classification {
            score: Score::Unscored,
            label: "No scores",
            severity: Severity::Low,
            action: "Enter scores to compute priority.",
        };
    }

    let (label, severity, action) = match score {
        s if s >= 7 => (
            "Critical",
            Severity::Critical,
            "Immediate mitigation before deployment.",
        ),
        s if s >= 5 => (
            "High",
            Severity::High,
            "Mitigation required and ongoing monitoring.",
        ),
        s if s >= 3 => ("Medium", Severity::Medium, "Monitor and review periodically."),
        _ => ("Low", Severity::Low, "Document and keep under observation."),
    };

    Classification {
        score: Score::Points(score),
        label,
        severity,
        action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(impact: &str, likelihood: &str, relevance: &str) -> RiskRow {
        RiskRow {
            impact: impact.into(),
            likelihood: likelihood.into(),
            relevance: relevance.into(),
            ..Default::default()
        }
    }

    #[test]
    fn normalize_accepts_surrounding_whitespace() {
        assert_eq!(normalize_rating(" 3 "), 3);
    }

    #[test]
    fn normalize_keeps_the_integer_part_of_decimals() {
        assert_eq!(normalize_rating("2.5"), 2);
        assert_eq!(normalize_rating("1.9"), 1);
        assert_eq!(normalize_rating("-2.5"), 0);
        assert_eq!(normalize_rating(".5"), 0);
    }

    #[test]
    fn normalize_stops_at_trailing_text() {
        assert_eq!(normalize_rating("2x"), 2);
        assert_eq!(normalize_rating("+3rd"), 3);
        assert_eq!(normalize_rating("x2"), 0);
    }

    #[test]
    fn normalize_saturates_oversized_digit_runs() {
        assert_eq!(normalize_rating("12345678901234567890"), 3);
        assert_eq!(normalize_rating("-12345678901234567890"), 0);
    }

    #[test]
    fn empty_row_is_unscored() {
        let result = classify(&RiskRow::default());
        assert_eq!(result.score, Score::Unscored);
        assert_eq!(result.label, "No scores");
        assert_eq!(result.severity, Severity::Low);
    }

    #[test]
    fn explicit_zeros_collapse_to_unscored() {
        // Same branch as the all-empty row; the two are not distinguished.
        let result = classify(&row("0", "0", "0"));
        assert_eq!(result.label, "No scores");
        assert_eq!(result.score, Score::Unscored);
    }

    #[test]
    fn maximum_ratings_are_critical() {
        let result = classify(&row("3", "3", "3"));
        assert_eq!(result.score, Score::Points(9));
        assert_eq!(result.label, "Critical");
        assert_eq!(result.severity, Severity::Critical);
    }

    #[test]
    fn threshold_boundaries() {
        assert_eq!(classify(&row("3", "3", "1")).label, "Critical"); // 7
        assert_eq!(classify(&row("3", "3", "0")).label, "High"); // 6
        assert_eq!(classify(&row("3", "2", "0")).label, "High"); // 5
        assert_eq!(classify(&row("2", "2", "0")).label, "Medium"); // 4
        assert_eq!(classify(&row("1", "1", "1")).label, "Medium"); // 3
        assert_eq!(classify(&row("1", "1", "0")).label, "Low"); // 2
        assert_eq!(classify(&row("1", "0", "0")).label, "Low"); // 1
    }

    #[test]
    fn malformed_ratings_coerce_to_zero() {
        let result = classify(&row("high", "2", "1"));
        assert_eq!(result.score, Score::Points(3));
        assert_eq!(result.label, "Medium");
    }

    #[test]
    fn out_of_range_ratings_clamp() {
        let result = classify(&row("999", "-5", "2"));
        assert_eq!(result.score, Score::Points(5));
        assert_eq!(result.label, "High");
    }

    #[test]
    fn classify_is_pure() {
        let r = row("2", "1", "1");
        assert_eq!(classify(&r), classify(&r));
    }
}
