//! Weighting policy for the bias-source priority table.
//!
//! The weights form a convex combination: each lies in [0, 1] and the five
//! sum to 1.0. They are an explicit configuration record handed to the
//! classifier at construction, immutable afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance for the sum-to-1.0 check, matching how floating point weights
/// are compared elsewhere in the config layer.
const SUM_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("{name} weight must be between 0.0 and 1.0, got {value}")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("priority weights must sum to 1.0, but sum to {sum:.3}")]
    BadSum { sum: f64 },
}

/// Per-field weights of the priority score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// Weight for impact severity (default 0.30)
    #[serde(default = "default_severity_weight")]
    pub severity: f64,

    /// Weight for affected scope (default 0.20)
    #[serde(default = "default_scope_weight")]
    pub scope: f64,

    /// Weight for persistence over time (default 0.20)
    #[serde(default = "default_persistence_weight")]
    pub persistence: f64,

    /// Weight for alignment with historical patterns (default 0.20)
    #[serde(default = "default_historical_weight")]
    pub historical: f64,

    /// Weight for intervention feasibility (default 0.10)
    #[serde(default = "default_feasibility_weight")]
    pub feasibility: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            severity: default_severity_weight(),
            scope: default_scope_weight(),
            persistence: default_persistence_weight(),
            historical: default_historical_weight(),
            feasibility: default_feasibility_weight(),
        }
    }
}

impl PriorityWeights {
    fn check_range(value: f64, name: &'static str) -> Result<(), WeightsError> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(WeightsError::OutOfRange { name, value })
        }
    }

    /// Validate that every weight lies in [0, 1] and the five sum to 1.0
    /// (within a small floating point tolerance).
    ///
    /// Validation runs at configuration time only; the classification path
    /// never rejects input.
    pub fn validate(&self) -> Result<(), WeightsError> {
        Self::check_range(self.severity, "severity")?;
        Self::check_range(self.scope, "scope")?;
        Self::check_range(self.persistence, "persistence")?;
        Self::check_range(self.historical, "historical")?;
        Self::check_range(self.feasibility, "feasibility")?;

        let sum =
            self.severity + self.scope + self.persistence + self.historical + self.feasibility;
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightsError::BadSum { sum });
        }
        Ok(())
    }
}

fn default_severity_weight() -> f64 {
    0.30
}
fn default_scope_weight() -> f64 {
    0.20
}
fn default_persistence_weight() -> f64 {
    0.20
}
fn default_historical_weight() -> f64 {
    0.20
}
fn default_feasibility_weight() -> f64 {
    0.10
}
