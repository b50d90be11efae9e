//! Tabular results: the common currency between fetch operations and the
//! CLI/persistence layer.
//!
//! A [`DataTable`] is an ordered set of named columns over rows of JSON
//! values (the stats API mixes strings, numbers, and nulls freely).
//! `DataTable::default()` is the canonical empty result the retry layer
//! falls back to, so downstream code never distinguishes "no data" from
//! "gave up".

use serde_json::Value;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from a result set's headers and row values. Rows are
    /// truncated or null-padded to the header width so the table stays
    /// rectangular.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Null);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Project onto the named columns, keeping only those present.
    /// Useful for console previews of wide tables.
    pub fn select(&self, names: &[&str]) -> DataTable {
        let indices: Vec<usize> = names
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();
        let columns = indices.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        DataTable { columns, rows }
    }

    /// Render a cell for console/CSV output: bare strings, compact JSON
    /// for everything else, empty for null.
    pub fn cell_to_string(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Plain-text rendering: header line plus one tab-separated line per
    /// row. Console preview only; CSV output goes through `storage`.
    pub fn to_display_string(&self) -> String {
        let mut out = self.columns.join("\t");
        for row in &self.rows {
            out.push('\n');
            let cells: Vec<String> = row.iter().map(Self::cell_to_string).collect();
            out.push_str(&cells.join("\t"));
        }
        out
    }
}
