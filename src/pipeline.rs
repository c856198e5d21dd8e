//! End-to-end flow: scan columns, resolve profiles, derive features,
//! classify, assemble.

use crate::catalog::resolve;
use crate::config::AppConfig;
use crate::dataset::{write_dataset, write_summary_json, Dataset, EnrichedRecord};
use crate::error::PipelineResult;
use crate::extract::{extract, ColumnExtraction};
use crate::features::derive;
use crate::grid::{load_grid, Grid};
use crate::market::{classify, MarketContext};
use crate::scanner::matchers::BRAND;
use crate::scanner::ScanSettings;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq)]
pub struct PipelineSettings {
    pub scan: ScanSettings,
    /// Market-trend reference year. Derived from the data when `None`;
    /// the system clock is never used.
    pub analysis_year: Option<i32>,
    pub parallel: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            scan: ScanSettings::default(),
            analysis_year: None,
            parallel: true,
        }
    }
}

/// Turn one column's readings into enriched records.
pub fn enrich_column(extraction: &ColumnExtraction, context: &MarketContext) -> Vec<EnrichedRecord> {
    let profile = resolve(&extraction.model, Some(extraction.capacity));
    if profile.family.is_none() {
        warn!(
            "Column {}: no catalog entry for {}, using default profile",
            extraction.column, extraction.model
        );
    }

    extraction
        .observations
        .iter()
        .map(|observation| EnrichedRecord {
            column: extraction.column,
            row: observation.row,
            date: observation.date,
            brand: BRAND,
            model: extraction.model.clone(),
            capacity: extraction.capacity,
            capacity_detected: extraction.capacity_detected,
            price: observation.price,
            profile: profile.clone(),
            features: derive(observation, &profile, extraction.capacity),
            market: classify(
                observation.price,
                extraction.mean_price,
                observation.date,
                context,
            ),
        })
        .collect()
}

/// Pure transform from grid to dataset. Same grid and settings, same dataset.
pub fn run_pipeline(grid: &Grid, settings: &PipelineSettings) -> PipelineResult<Dataset> {
    let extractions = extract(grid, &settings.scan, settings.parallel);

    let Some(context) = MarketContext::resolve(settings.analysis_year, &extractions) else {
        info!("No usable columns found, dataset is empty");
        return Ok(Dataset::assemble(Vec::<Vec<EnrichedRecord>>::new(), settings.analysis_year)?);
    };

    let batches = extractions.iter().map(|e| enrich_column(e, &context));
    let dataset = Dataset::assemble(batches, Some(context.analysis_year))?;
    Ok(dataset)
}

/// Load, transform and write according to `config`.
///
/// Input absence aborts before anything is written; the table is only
/// written after every record passed validation.
pub fn run(config: &AppConfig) -> PipelineResult<Dataset> {
    info!("Reading price sheet {}", config.input.display());
    let grid = load_grid(&config.input, config.delimiter)?;

    let dataset = run_pipeline(&grid, &config.pipeline_settings())?;
    dataset.summary().log();

    write_dataset(&config.output, &dataset, config.labels)?;
    if let Some(path) = &config.summary_json {
        write_summary_json(path, dataset.summary())?;
    }
    Ok(dataset)
}
