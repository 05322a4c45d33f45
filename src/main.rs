//! tabio - inspect and convert tabular CSV datasets

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use tabio::dataset::save_dataset_csv;
use tabio::model::{Column, Table};
use tabio::parser::read_table;

/// Load and save tabular CSV datasets
#[derive(Parser, Debug)]
#[command(name = "tabio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the shape, column types, and first rows of a dataset
    Info {
        /// File to inspect
        file: PathBuf,

        /// Maximum number of rows to preview
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Emit a JSON summary instead
        #[arg(long)]
        json: bool,
    },
    /// Load a dataset and save it back out as CSV
    Convert {
        /// Input file
        input: PathBuf,

        /// Output path (defaults to final_dataset.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Info { file, limit, json } => {
            let table = read_table(&file)
                .with_context(|| format!("Failed to load dataset: {}", file.display()))?;

            if json {
                print_json_summary(&file, &table)?;
            } else {
                print_info(&file, &table, limit);
            }
        }
        Command::Convert { input, output } => {
            let table = read_table(&input)
                .with_context(|| format!("Failed to load dataset: {}", input.display()))?;

            save_dataset_csv(&table, output.as_deref()).context("Failed to save dataset")?;
        }
    }

    Ok(())
}

/// Serializable summary for `info --json`
#[derive(Serialize)]
struct JsonSummary<'a> {
    file: String,
    rows: usize,
    columns: &'a [Column],
}

fn print_json_summary(path: &Path, table: &Table) -> Result<()> {
    let summary = JsonSummary {
        file: path.display().to_string(),
        rows: table.row_count(),
        columns: table.columns(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn print_info(path: &Path, table: &Table, limit: usize) {
    println!(
        "{}: {} rows x {} columns",
        path.display(),
        table.row_count(),
        table.column_count()
    );
    for column in table.columns() {
        println!("  {} ({})", column.name, column.inferred_type);
    }

    if table.is_empty() || limit == 0 {
        return;
    }

    println!();
    let mut builder = Builder::default();
    builder.push_record(table.column_names());
    for row in table.rows().iter().take(limit) {
        builder.push_record(row.iter().map(|cell| cell.to_string()));
    }
    let mut preview = builder.build();
    preview.with(Style::sharp());
    println!("{preview}");
}
