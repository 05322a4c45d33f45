//! CSV serialization of in-memory tables

use std::path::Path;

use crate::error::DatasetError;
use crate::model::Table;

/// Write a [`Table`] as CSV to the given path.
///
/// The header record holds the column names; rows follow in order, nulls
/// as empty fields. No row-index column is written. An existing file at
/// the path is overwritten.
pub fn write_table(table: &Table, path: &Path) -> Result<(), DatasetError> {
    write_records(table, path).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_records(table: &Table, path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(table.column_names())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.csv_field().into_owned()))?;
    }
    writer.flush()?;

    Ok(())
}
