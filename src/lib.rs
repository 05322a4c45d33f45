//! tabio - load and save tabular CSV datasets
//!
//! A small library for reading delimited text files into an in-memory
//! [`Table`] and writing tables back out as CSV.
//!
//! Two layers are exposed:
//!
//! * [`parser::read_table`] and [`writer::write_table`] return an explicit
//!   [`DatasetError`] so callers can branch on the outcome.
//! * [`dataset::load_dataset`] and [`dataset::save_dataset_csv`] are the
//!   log-and-go convenience operations: load swallows failures into `None`
//!   after logging them, save logs the output path and propagates errors.

pub mod dataset;
pub mod error;
pub mod model;
pub mod parser;
pub mod writer;

pub use dataset::{load_dataset, save_dataset_csv, DEFAULT_OUTPUT_PATH};
pub use error::DatasetError;
pub use model::Table;
