//! fairscore: scoring and prioritization engine for fairness audit
//! worksheets.
//!
//! Two classification pipelines share one shape: editable rows in a
//! [`store::RowStore`], coercive normalization of raw ratings, and a pure
//! classifier that derives a score, label, severity tier, and recommended
//! action. A third component, the [`relevance::RelevanceItem`] gate, drives
//! per-item star ratings that reveal a notes field.
//!
//! Every input path is total: malformed ratings coerce to a safe default
//! instead of raising validation errors, so the hosting layer can forward
//! raw user edits without pre-checking them.

// Export modules for library usage
pub mod config;
pub mod core;
pub mod priority;
pub mod relevance;
pub mod risk;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Classification, Score, Severity};

pub use crate::priority::{PriorityClassifier, PriorityField, PriorityRow, PriorityWeights};

pub use crate::relevance::{RelevanceItem, RelevanceState};

pub use crate::risk::{RiskField, RiskRow};

pub use crate::store::{
    EditableRow, PriorityTable, RiskMatrix, RowStore, PRIORITY_SEED_ROWS, RISK_SEED_ROWS,
};
