//! Unit tests for the tabular result type.

use super::*;
use serde_json::json;

fn sample_table() -> DataTable {
    let mut table = DataTable::new(vec![
        "GAME_ID".to_string(),
        "MATCHUP".to_string(),
        "PTS".to_string(),
    ]);
    table.push_row(vec![json!("0022400123"), json!("LAL vs. BOS"), json!(112)]);
    table.push_row(vec![json!("0022400456"), json!("LAL @ DEN"), json!(98)]);
    table
}

#[test]
fn test_default_is_the_empty_result() {
    let table = DataTable::default();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert!(table.columns().is_empty());
}

#[test]
fn test_len_and_rows() {
    let table = sample_table();
    assert_eq!(table.len(), 2);
    assert!(!table.is_empty());
    assert_eq!(table.rows()[1][2], json!(98));
}

#[test]
fn test_short_rows_are_null_padded() {
    let mut table = DataTable::new(vec!["A".to_string(), "B".to_string()]);
    table.push_row(vec![json!(1)]);
    assert_eq!(table.rows()[0], vec![json!(1), Value::Null]);

    let table = DataTable::from_rows(
        vec!["A".to_string(), "B".to_string()],
        vec![vec![json!(1)], vec![json!(2), json!(3), json!(4)]],
    );
    assert_eq!(table.rows()[0], vec![json!(1), Value::Null]);
    assert_eq!(table.rows()[1], vec![json!(2), json!(3)]);
}

#[test]
fn test_column_index() {
    let table = sample_table();
    assert_eq!(table.column_index("GAME_ID"), Some(0));
    assert_eq!(table.column_index("PTS"), Some(2));
    assert_eq!(table.column_index("WL"), None);
}

#[test]
fn test_select_keeps_only_present_columns() {
    let table = sample_table();
    let preview = table.select(&["GAME_ID", "WL", "PTS"]);
    assert_eq!(preview.columns(), ["GAME_ID", "PTS"]);
    assert_eq!(preview.len(), 2);
    assert_eq!(preview.rows()[0], vec![json!("0022400123"), json!(112)]);
}

#[test]
fn test_cell_rendering() {
    assert_eq!(DataTable::cell_to_string(&Value::Null), "");
    assert_eq!(DataTable::cell_to_string(&json!("LAL")), "LAL");
    assert_eq!(DataTable::cell_to_string(&json!(112)), "112");
    assert_eq!(DataTable::cell_to_string(&json!(0.5)), "0.5");
    assert_eq!(DataTable::cell_to_string(&json!(true)), "true");
}

#[test]
fn test_display_string() {
    let table = sample_table();
    let text = table.to_display_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "GAME_ID\tMATCHUP\tPTS");
    assert_eq!(lines[1], "0022400123\tLAL vs. BOS\t112");
}
