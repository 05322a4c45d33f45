//! The documented dataset operations: load with logged, swallowed failures
//! and save with a default output path.

use std::path::Path;

use log::{error, info};

use crate::error::DatasetError;
use crate::model::Table;
use crate::{parser, writer};

/// Output filename used when the caller supplies none
pub const DEFAULT_OUTPUT_PATH: &str = "final_dataset.csv";

/// Load a dataset from a CSV file.
///
/// On success one info line is logged and the table returned. On failure
/// one error line is logged and `None` returned; nothing propagates. A
/// missing file and a malformed one are distinguishable only in the log.
/// Callers that need to branch on the reason should use
/// [`parser::read_table`] instead.
pub fn load_dataset<P: AsRef<Path>>(file_path: P) -> Option<Table> {
    let path = file_path.as_ref();
    match parser::read_table(path) {
        Ok(table) => {
            info!("Dataset loaded successfully from {}", path.display());
            Some(table)
        }
        Err(DatasetError::FileNotFound(_)) => {
            error!("File not found at {}", path.display());
            None
        }
        Err(err) => {
            error!("An error occurred: {err}");
            None
        }
    }
}

/// Save a dataset as CSV, overwriting any existing file at the path.
///
/// When `output_path` is `None` the file is written to
/// [`DEFAULT_OUTPUT_PATH`] in the current working directory. One info line
/// is logged on success; write errors propagate to the caller.
pub fn save_dataset_csv(table: &Table, output_path: Option<&Path>) -> Result<(), DatasetError> {
    let path = output_path.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_PATH));
    writer::write_table(table, path)?;
    info!("Final dataset saved to '{}'", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    fn sample() -> Table {
        let mut table = Table::with_headers(["id", "name"]);
        table.push_row(vec![1i64.into(), "ada".into()]);
        table
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        assert!(load_dataset("/nonexistent/path.csv").is_none());
    }

    #[test]
    fn test_load_malformed_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.csv");
        std::fs::write(&path, [0xffu8, 0xfe, 0x00, 0x42]).unwrap();
        assert!(load_dataset(&path).is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        save_dataset_csv(&sample(), Some(&path)).unwrap();
        let loaded = load_dataset(&path).unwrap();

        assert_eq!(loaded.row_count(), 1);
        assert_eq!(loaded.get(0, "name"), Some(&CellValue::from("ada")));
    }

    #[test]
    fn test_save_error_propagates() {
        let err = save_dataset_csv(&sample(), Some(Path::new("/nonexistent/dir/out.csv")));
        assert!(err.is_err());
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(DEFAULT_OUTPUT_PATH, "final_dataset.csv");
    }
}
