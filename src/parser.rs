//! CSV file parsing into in-memory tables

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::DatasetError;
use crate::model::{CellValue, Table};

/// Read a delimited text file into a [`Table`].
///
/// The first record names the columns; every following record becomes a
/// row. Ragged records are tolerated: short rows are padded with nulls,
/// long rows truncated to the header width.
pub fn read_table(path: &Path) -> Result<Table, DatasetError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => DatasetError::FileNotFound(path.to_path_buf()),
        _ => DatasetError::Open {
            path: path.to_path_buf(),
            source,
        },
    })?;

    read_records(BufReader::new(file)).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_records<R: std::io::Read>(reader: R) -> Result<Table, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut table = Table::with_headers(headers.iter());

    for result in csv_reader.records() {
        let record = result?;
        let cells: Vec<CellValue> = record.iter().map(parse_cell_value).collect();
        table.push_row(cells);
    }

    table.refresh_column_types();

    Ok(table)
}

/// Parse a string value into a CellValue with type inference
fn parse_cell_value(s: &str) -> CellValue {
    let trimmed = s.trim();

    // Check for empty/null
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") || trimmed == "NA" {
        return CellValue::Null;
    }

    // Try parsing as boolean
    if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("yes") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("no") {
        return CellValue::Bool(false);
    }

    // Try parsing as integer
    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }

    // Try parsing as float
    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }

    // Try parsing as date
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CellValue::Date(date);
    }

    // Try parsing as datetime (ISO 8601)
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return CellValue::DateTime(dt);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return CellValue::DateTime(dt);
    }

    // Default to string
    CellValue::String(trimmed.to_string())
}
