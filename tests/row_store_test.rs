use fairscore::{
    PriorityClassifier, PriorityField, PriorityRow, PriorityTable, RiskField, RiskMatrix, RiskRow,
    Score, PRIORITY_SEED_ROWS, RISK_SEED_ROWS,
};
use pretty_assertions::assert_eq;

#[test]
fn risk_matrix_seeds_three_empty_rows() {
    let matrix = RiskMatrix::default();
    assert_eq!(matrix.len(), RISK_SEED_ROWS);
    for row in matrix.rows() {
        assert_eq!(*row, RiskRow::default());
    }
}

#[test]
fn priority_table_seeds_four_default_rows() {
    let table = PriorityTable::default();
    assert_eq!(table.len(), PRIORITY_SEED_ROWS);
    for row in table.rows() {
        assert_eq!(row.severity, "1");
        assert_eq!(row.name, "");
    }
}

#[test]
fn add_row_preserves_existing_rows_and_order() {
    let mut matrix = RiskMatrix::default();
    matrix.update_row(0, RiskField::Pattern, "first");
    matrix.update_row(2, RiskField::Pattern, "third");
    matrix.add_row();

    assert_eq!(matrix.len(), RISK_SEED_ROWS + 1);
    assert_eq!(matrix.rows()[0].pattern, "first");
    assert_eq!(matrix.rows()[2].pattern, "third");
    assert_eq!(matrix.rows()[3], RiskRow::default());
}

#[test]
fn update_row_leaves_unedited_fields_alone() {
    let mut table = PriorityTable::default();
    table.update_row(1, PriorityField::Owner, "ml platform");
    table.update_row(1, PriorityField::Severity, "4");

    let row = &table.rows()[1];
    assert_eq!(row.owner, "ml platform");
    assert_eq!(row.severity, "4");
    assert_eq!(row.scope, "1");
    assert_eq!(table.rows()[0], PriorityRow::default());
}

#[test]
fn stale_index_updates_are_absorbed() {
    let mut table = PriorityTable::default();
    table.update_row(PRIORITY_SEED_ROWS + 5, PriorityField::Name, "ghost");
    assert_eq!(table.len(), PRIORITY_SEED_ROWS);
    for row in table.rows() {
        assert_eq!(row.name, "");
    }
}

#[test]
fn clear_rows_always_restores_exactly_four_defaults() {
    let mut table = PriorityTable::default();
    for _ in 0..6 {
        table.add_row();
    }
    table.update_row(0, PriorityField::Name, "label leakage");
    table.update_row(9, PriorityField::Severity, "5");

    table.clear_rows();

    assert_eq!(table.len(), PRIORITY_SEED_ROWS);
    for row in table.rows() {
        assert_eq!(*row, PriorityRow::default());
    }
}

#[test]
fn clear_rows_after_shrinking_below_seed_is_still_four() {
    // Clearing resets regardless of prior count, larger or smaller.
    let mut table = PriorityTable::seeded(1);
    table.add_row();
    table.clear_rows();
    assert_eq!(table.len(), 1);

    let mut standard = PriorityTable::default();
    standard.clear_rows();
    assert_eq!(standard.len(), PRIORITY_SEED_ROWS);
}

#[test]
fn classifications_are_derived_per_row_on_every_read() {
    let mut matrix = RiskMatrix::default();
    matrix.update_row(0, RiskField::Impact, "3");
    matrix.update_row(0, RiskField::Likelihood, "3");
    matrix.update_row(0, RiskField::Relevance, "3");

    let first = matrix.classifications();
    assert_eq!(first[0].score, Score::Points(9));
    assert_eq!(first[1].label, "No scores");

    // Editing the row is immediately visible on the next read.
    matrix.update_row(0, RiskField::Impact, "0");
    let second = matrix.classifications();
    assert_eq!(second[0].score, Score::Points(6));
    assert_eq!(second[0].label, "High");
}

#[test]
fn priority_classifications_follow_the_table() {
    let classifier = PriorityClassifier::default();
    let mut table = PriorityTable::default();
    table.update_row(2, PriorityField::Severity, "5");
    table.update_row(2, PriorityField::Scope, "5");
    table.update_row(2, PriorityField::Persistence, "5");
    table.update_row(2, PriorityField::Historical, "5");
    table.update_row(2, PriorityField::Feasibility, "5");

    let results = table.classifications(&classifier);
    assert_eq!(results.len(), PRIORITY_SEED_ROWS);
    assert_eq!(results[2].score, Score::Weighted(5.0));
    assert_eq!(results[2].label, "High");
    assert_eq!(results[0].score, Score::Weighted(1.0));
}
