mod column;
pub mod matchers;

pub use column::{find_identifier, find_observations, scan_column, ColumnScan, Observation};
pub use matchers::ModelMatch;

use crate::catalog::Capacity;

pub const DEFAULT_HEADER_ZONE_CELLS: usize = 8;
pub const DEFAULT_LOOKAHEAD_CELLS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct ScanSettings {
    /// Leading cells of a column searched for the model identifier.
    pub header_zone_cells: usize,
    /// Cells searched for a price, starting at the date cell.
    pub lookahead_cells: usize,
    /// Capacity assumed when the header names a model but no capacity.
    pub default_capacity: Capacity,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            header_zone_cells: DEFAULT_HEADER_ZONE_CELLS,
            lookahead_cells: DEFAULT_LOOKAHEAD_CELLS,
            default_capacity: Capacity::DEFAULT,
        }
    }
}
