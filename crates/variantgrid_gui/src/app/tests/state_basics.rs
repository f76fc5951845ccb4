//! Toolbar/row action tests and status/toast feedback behavior.

use super::*;

#[test]
fn toolbar_session_matches_expected_table_shape() {
    let mut harness = make_app();

    harness.app.apply_action(TableAction::AddRow);
    assert_eq!(row_ids(&harness.app), vec![1, 2]);

    harness.app.apply_action(TableAction::AddColumn);
    for row in harness.app.editor.rows() {
        assert_eq!(row.variants.len(), 2);
        assert_eq!(row.variants[1], "Variant 2");
    }

    harness.app.apply_action(TableAction::DeleteColumn);
    assert!(harness
        .app
        .editor
        .rows()
        .iter()
        .all(|row| row.variants.len() == 1));

    harness.app.apply_action(TableAction::DeleteRow(RowId(1)));
    assert_eq!(row_ids(&harness.app), vec![2]);
}

#[test]
fn add_row_reports_new_state_name() {
    let mut harness = make_app();
    harness.app.apply_action(TableAction::AddRow);

    assert_eq!(
        harness.app.status.as_ref().map(|status| status.text.as_str()),
        Some("Added State 2.")
    );
}

#[test]
fn delete_missing_row_leaves_table_and_status_alone() {
    let mut harness = make_app_with_rows(2);
    harness.app.status = None;
    harness.app.toasts.clear();

    harness.app.apply_action(TableAction::DeleteRow(RowId(42)));

    assert_eq!(row_ids(&harness.app), vec![1, 2]);
    assert!(harness.app.status.is_none());
    assert!(harness.app.toasts.is_empty());
}

#[test]
fn delete_column_at_zero_reports_nothing_left() {
    let mut harness = make_app();
    harness.app.apply_action(TableAction::DeleteColumn);
    harness.app.apply_action(TableAction::DeleteColumn);

    assert_eq!(harness.app.editor.column_count(), 0);
    assert_eq!(
        harness.app.status.as_ref().map(|status| status.text.as_str()),
        Some("No variants left to delete.")
    );
}

#[test]
fn report_updates_status_and_pushes_toast() {
    let mut harness = make_app();
    harness
        .app
        .report(Feedback::ColumnAdded("Variant 2".to_string()));

    assert_eq!(
        harness.app.status.as_ref().map(|status| status.text.as_str()),
        Some("Added Variant 2 to every state.")
    );
    assert_eq!(harness.app.toasts.len(), 1);
    assert_eq!(
        harness.app.toasts.back().map(|toast| toast.feedback.message()),
        Some("Added Variant 2 to every state.".to_string())
    );
}

#[test]
fn same_kind_reports_fold_into_newest_toast() {
    let mut harness = make_app();
    for _ in 0..3 {
        harness.app.apply_action(TableAction::AddColumn);
    }

    assert_eq!(harness.app.toasts.len(), 1);
    let toast = harness.app.toasts.back().expect("toast");
    assert_eq!(toast.repeats, 3);
    assert_eq!(toast.feedback, Feedback::ColumnAdded("Variant 4".to_string()));
}

#[test]
fn different_kinds_stack_separately_up_to_limit() {
    let mut harness = make_app();
    harness.app.apply_action(TableAction::AddRow);
    harness.app.apply_action(TableAction::AddColumn);
    harness.app.apply_action(TableAction::DeleteColumn);
    harness.app.apply_action(TableAction::DeleteRow(RowId(2)));
    harness.app.apply_action(TableAction::AddRow);

    assert_eq!(harness.app.toasts.len(), TOAST_LIMIT);
    let kinds: Vec<Feedback> = harness
        .app
        .toasts
        .iter()
        .map(|toast| toast.feedback.clone())
        .collect();
    assert_eq!(
        kinds,
        vec![
            Feedback::ColumnAdded("Variant 2".to_string()),
            Feedback::ColumnDeleted("Variant 2".to_string()),
            Feedback::RowDeleted("State 2".to_string()),
            Feedback::RowAdded("State 3".to_string()),
        ]
    );
}

#[test]
fn expired_feedback_is_dropped() {
    let mut harness = make_app();
    harness.app.apply_action(TableAction::AddRow);

    harness
        .app
        .expire_feedback(Instant::now() + STATUS_TTL + TOAST_TTL);

    assert!(harness.app.status.is_none());
    assert!(harness.app.toasts.is_empty());
}
