//! Common test infrastructure
//!
//! Sheets are described column by column, the way the extractor reads them,
//! and written to a temporary directory as CSV rows.

#![allow(dead_code)]

use price_sheet_extractor::config::{AppConfig, CliConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const IPHONE_15_HEADER: &str = "iPhone 15 256GB";
pub const IPHONE_13_HEADER: &str = "iPhone 13 128GB";

pub struct TestSheet {
    pub dir: TempDir,
    pub input: PathBuf,
}

impl TestSheet {
    /// Write `columns` (each a top-to-bottom list of cells) as a CSV sheet.
    pub fn from_columns(columns: &[&[&str]]) -> Self {
        Self::from_columns_with(columns, "prices.csv", b',')
    }

    pub fn from_columns_with(columns: &[&[&str]], file_name: &str, delimiter: u8) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let input = dir.path().join(file_name);

        let height = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_path(&input)
            .expect("Failed to create sheet");
        for row in 0..height {
            let cells: Vec<&str> = columns
                .iter()
                .map(|column| column.get(row).copied().unwrap_or(""))
                .collect();
            writer.write_record(&cells).expect("Failed to write row");
        }
        writer.flush().expect("Failed to flush sheet");

        Self { dir, input }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn config(&self, output: &str) -> AppConfig {
        self.config_with(output, |_| {})
    }

    pub fn config_with(&self, output: &str, customize: impl FnOnce(&mut CliConfig)) -> AppConfig {
        let mut cli = CliConfig {
            input: Some(self.input.clone()),
            output: Some(self.path(output)),
            ..Default::default()
        };
        customize(&mut cli);
        AppConfig::resolve(&cli, None).expect("Failed to resolve config")
    }
}

/// Parse a written table into a header row and data rows.
pub fn read_table(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open output table");
    let headers = reader
        .headers()
        .expect("Output table has no header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.expect("Malformed output row").iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

pub fn cell<'a>(headers: &[String], row: &'a [String], name: &str) -> &'a str {
    let index = headers
        .iter()
        .position(|h| h == name)
        .unwrap_or_else(|| panic!("No column {name} in output"));
    &row[index]
}
