//! Column-wise extraction across the whole sheet.

use crate::catalog::Capacity;
use crate::grid::Grid;
use crate::scanner::{scan_column, Observation, ScanSettings};
use rayon::prelude::*;
use tracing::debug;

/// The readings of one usable column, tied to the model/capacity in its header.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnExtraction {
    pub column: usize,
    pub model: String,
    pub capacity: Capacity,
    pub capacity_detected: bool,
    pub observations: Vec<Observation>,
    pub mean_price: f64,
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

/// Scan a single column. Columns with no identifier or no readings yield `None`.
pub fn extract_column(column: usize, cells: &[String], settings: &ScanSettings) -> Option<ColumnExtraction> {
    let scan = scan_column(cells, settings);
    let Some(identifier) = scan.identifier else {
        debug!("Column {} skipped: no model identifier in header zone", column);
        return None;
    };
    if scan.observations.is_empty() {
        debug!(
            "Column {} ({}) skipped: no dated prices",
            column, identifier.model
        );
        return None;
    }

    let mean_price = mean(scan.observations.iter().map(|o| o.price));
    Some(ColumnExtraction {
        column,
        model: identifier.model,
        capacity: identifier.capacity,
        capacity_detected: identifier.capacity_detected,
        observations: scan.observations,
        mean_price,
    })
}

/// Extract every usable column, in left-to-right order.
///
/// With `parallel` the columns are scanned on the rayon pool; the result
/// order is the same either way.
pub fn extract(grid: &Grid, settings: &ScanSettings, parallel: bool) -> Vec<ColumnExtraction> {
    let parallel = parallel && !cfg!(feature = "no_parallel");
    let extractions: Vec<ColumnExtraction> = if parallel {
        grid.columns()
            .par_iter()
            .enumerate()
            .filter_map(|(i, cells)| extract_column(i, cells, settings))
            .collect()
    } else {
        grid.columns()
            .iter()
            .enumerate()
            .filter_map(|(i, cells)| extract_column(i, cells, settings))
            .collect()
    };
    debug!(
        "{} of {} columns produced readings",
        extractions.len(),
        grid.column_count()
    );
    extractions
}
