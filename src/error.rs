//! Error types surfaced by the extraction pipeline.
//!
//! Only total input absence and structural violations of the output
//! contract reach the caller. Unrecognised cells, unknown models and
//! empty columns are absorbed where they happen.

use crate::dataset::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Input grid not found or not readable: {path:?}")]
    InputMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input grid could not be decoded: {path:?}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Structural incompleteness: {0}")]
    Incomplete(#[from] ValidationError),

    #[error("Failed to write output {path:?}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
