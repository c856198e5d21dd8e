//! The raw input sheet: a rectangular grid of text cells, addressed by column.

use crate::error::{PipelineError, PipelineResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    columns: Vec<Vec<String>>,
    row_count: usize,
}

impl Grid {
    /// Build from row-major cells; short rows are padded with empty cells.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let row_count = rows.len();
        let column_count = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut columns = vec![Vec::with_capacity(row_count); column_count];
        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.push(cells.next().unwrap_or_default());
            }
        }
        Self { columns, row_count }
    }

    /// Build from column-major cells; short columns are padded with empty cells.
    pub fn from_columns(mut columns: Vec<Vec<String>>) -> Self {
        let row_count = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        for column in columns.iter_mut() {
            column.resize(row_count, String::new());
        }
        Self { columns, row_count }
    }

    pub fn columns(&self) -> &[Vec<String>] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

/// Tab for `.tsv` files, comma for everything else.
pub fn delimiter_for_path(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

/// Decode a delimited sheet with no header row. Invalid UTF-8 is replaced, not rejected.
pub fn read_grid<R: Read>(reader: R, delimiter: u8) -> Result<Grid, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.byte_records() {
        let record = result?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).trim().to_string())
                .collect(),
        );
    }
    Ok(Grid::from_rows(rows))
}

pub fn load_grid(path: &Path, delimiter: u8) -> PipelineResult<Grid> {
    let file = File::open(path).map_err(|source| PipelineError::InputMissing {
        path: path.to_owned(),
        source,
    })?;
    let grid = read_grid(file, delimiter).map_err(|source| PipelineError::InputUnreadable {
        path: path.to_owned(),
        source,
    })?;
    info!(
        "Loaded grid {} with {} columns and {} rows",
        path.display(),
        grid.column_count(),
        grid.row_count()
    );
    Ok(grid)
}
