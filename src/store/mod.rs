//! Ordered stores of editable worksheet rows.
//!
//! A store exclusively owns its rows. All operations are synchronous and
//! total: updates to a stale index are ignored rather than rejected, and no
//! validation runs at write time — malformed field values are absorbed by
//! the normalizers when a classification is read.

use crate::core::Classification;
use crate::priority::{PriorityClassifier, PriorityField, PriorityRow};
use crate::risk::{self, RiskField, RiskRow};
use im::Vector;
use serde::{Deserialize, Serialize};

/// Rows the worksheet pre-seeds for the risk matrix.
pub const RISK_SEED_ROWS: usize = 3;
/// Rows the worksheet pre-seeds for the priority table, and the count
/// `clear_rows` restores.
pub const PRIORITY_SEED_ROWS: usize = 4;

/// A row whose fields can be addressed and replaced one at a time.
pub trait EditableRow: Clone + Default {
    type Field: Copy;

    /// Replace exactly one field with the raw text the host forwarded.
    fn set_field(&mut self, field: Self::Field, value: &str);
}

impl EditableRow for RiskRow {
    type Field = RiskField;

    fn set_field(&mut self, field: RiskField, value: &str) {
        let slot = match field {
            RiskField::Pattern => &mut self.pattern,
            RiskField::Impact => &mut self.impact,
            RiskField::Likelihood => &mut self.likelihood,
            RiskField::Relevance => &mut self.relevance,
            RiskField::Mitigation => &mut self.mitigation,
        };
        *slot = value.to_string();
    }
}

impl EditableRow for PriorityRow {
    type Field = PriorityField;

    fn set_field(&mut self, field: PriorityField, value: &str) {
        let slot = match field {
            PriorityField::Name => &mut self.name,
            PriorityField::Owner => &mut self.owner,
            PriorityField::Severity => &mut self.severity,
            PriorityField::Scope => &mut self.scope,
            PriorityField::Persistence => &mut self.persistence,
            PriorityField::Historical => &mut self.historical,
            PriorityField::Feasibility => &mut self.feasibility,
        };
        *slot = value.to_string();
    }
}

/// Ordered collection of editable rows with a fixed seed size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowStore<R: EditableRow> {
    rows: Vector<R>,
    seed_len: usize,
}

impl<R: EditableRow> RowStore<R> {
    /// Create a store pre-seeded with `seed_len` default rows.
    pub fn seeded(seed_len: usize) -> Self {
        Self {
            rows: std::iter::repeat_with(R::default).take(seed_len).collect(),
            seed_len,
        }
    }

    pub fn rows(&self) -> &Vector<R> {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a fresh default row, preserving existing order.
    pub fn add_row(&mut self) {
        self.rows.push_back(R::default());
    }

    /// Replace one field on one row. Out-of-bounds indices are ignored;
    /// every other row and field is left untouched.
    pub fn update_row(&mut self, index: usize, field: R::Field, value: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.set_field(field, value);
        }
    }

    /// Reset to the seed count of fresh default rows, discarding all prior
    /// entries irrecoverably.
    pub fn clear_rows(&mut self) {
        self.rows = std::iter::repeat_with(R::default)
            .take(self.seed_len)
            .collect();
    }
}

/// The risk-matrix worksheet table.
pub type RiskMatrix = RowStore<RiskRow>;

/// The bias-source priority worksheet table.
pub type PriorityTable = RowStore<PriorityRow>;

impl Default for RiskMatrix {
    fn default() -> Self {
        Self::seeded(RISK_SEED_ROWS)
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::seeded(PRIORITY_SEED_ROWS)
    }
}

impl RiskMatrix {
    /// Derive a fresh classification for every row, in row order. Results
    /// are computed on each call, never cached on the rows.
    pub fn classifications(&self) -> Vec<Classification> {
        self.rows.iter().map(risk::classify).collect()
    }
}

impl PriorityTable {
    /// Derive a fresh classification for every row under the given
    /// classifier's weighting policy.
    pub fn classifications(&self, classifier: &PriorityClassifier) -> Vec<Classification> {
        self.rows.iter().map(|row| classifier.classify(row)).collect()
    }
}
