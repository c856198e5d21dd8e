//! The assembled output: every enriched record, validated, plus a summary.

mod record;
mod summary;
mod validation;
pub mod writer;

pub use record::EnrichedRecord;
pub use summary::{DatasetSummary, ModelStats};
pub use validation::{validate_record, ValidationError, ValidationResult};
pub use writer::{write_dataset, write_summary_json, write_table, HEADERS};

/// Ordered records, one per observation, in column then row order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<EnrichedRecord>,
    summary: DatasetSummary,
}

impl Dataset {
    /// Concatenate per-column batches in the order given and validate every
    /// record. The first incomplete record fails the whole assembly.
    pub fn assemble<I>(batches: I, analysis_year: Option<i32>) -> ValidationResult<Dataset>
    where
        I: IntoIterator<Item = Vec<EnrichedRecord>>,
    {
        let records: Vec<EnrichedRecord> = batches.into_iter().flatten().collect();
        for record in &records {
            validate_record(record)?;
        }
        let summary = DatasetSummary::from_records(&records, analysis_year);
        Ok(Dataset { records, summary })
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
