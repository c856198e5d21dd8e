use super::matchers::{match_date, match_model, match_price, ModelMatch};
use super::ScanSettings;
use chrono::NaiveDate;
use tracing::trace;

/// One dated price reading found in a column.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    /// Row of the date cell that produced this reading.
    pub row: usize,
    pub date: NaiveDate,
    pub price: f64,
}

/// Everything a single column yielded. Columns share no state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnScan {
    pub identifier: Option<ModelMatch>,
    pub observations: Vec<Observation>,
}

impl ColumnScan {
    /// A column contributes rows only when it has both an identifier and readings.
    pub fn is_usable(&self) -> bool {
        self.identifier.is_some() && !self.observations.is_empty()
    }
}

/// First model identifier inside the header zone; later matches are ignored.
pub fn find_identifier(cells: &[String], settings: &ScanSettings) -> Option<ModelMatch> {
    cells
        .iter()
        .take(settings.header_zone_cells)
        .find_map(|cell| match_model(cell, settings.default_capacity))
}

/// Pair every date with the first price inside its lookahead window.
///
/// The window starts at the date cell itself and spans
/// `settings.lookahead_cells` cells. Dates with no price in range are dropped.
pub fn find_observations(cells: &[String], settings: &ScanSettings) -> Vec<Observation> {
    let mut observations = Vec::new();
    for (row, cell) in cells.iter().enumerate() {
        let Some(date) = match_date(cell) else {
            continue;
        };
        let window_end = row.saturating_add(settings.lookahead_cells).min(cells.len());
        match cells[row..window_end].iter().find_map(|c| match_price(c)) {
            Some(price) => observations.push(Observation { row, date, price }),
            None => trace!("No price within {} cells of date at row {}", settings.lookahead_cells, row),
        }
    }
    observations
}

pub fn scan_column(cells: &[String], settings: &ScanSettings) -> ColumnScan {
    ColumnScan {
        identifier: find_identifier(cells, settings),
        observations: find_observations(cells, settings),
    }
}
