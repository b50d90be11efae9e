//! CSV persistence for tabular results.
//!
//! One writer, one reader: [`write_csv`] persists a [`DataTable`]
//! (creating parent directories as needed), [`read_csv`] loads one back,
//! and [`read_stats`] is the display path behind the `read-stats`
//! subcommand.

use std::path::Path;

use serde_json::Value;

use crate::logging::log_info;
use crate::table::DataTable;
use crate::Result;


/// Write a table to `path` as CSV, creating missing parent directories.
/// Logs the row count on success.
pub fn write_csv(table: &DataTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.columns())?;
    for row in table.rows() {
        let record: Vec<String> = row.iter().map(DataTable::cell_to_string).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;

    log_info(
        &format!("Wrote {} rows to {}", table.len(), path.display()),
        &[],
    );
    Ok(())
}

/// Read a CSV file back into a table. All cells come back as strings;
/// type information is not round-tripped.
pub fn read_csv(path: &Path) -> Result<DataTable> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut table = DataTable::new(columns);
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(Value::from).collect());
    }
    Ok(table)
}

/// Load a saved stats CSV from the data directory and print it, with a
/// trailing row count.
pub fn read_stats(filename: &str, data_dir: &Path) -> Result<()> {
    let path = data_dir.join(filename);
    let table = read_csv(&path)?;

    println!("{}", table.to_display_string());
    println!("\n{} rows from {}", table.len(), path.display());
    Ok(())
}
