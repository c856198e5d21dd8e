//! Price Sheet Extractor Library
//!
//! Turns an irregular price spreadsheet (model labels, dates and prices
//! scattered through each column) into a normalized, feature-enriched
//! record set. Modules are exposed for testing and for downstream readers.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod features;
pub mod grid;
pub mod labels;
pub mod market;
pub mod pipeline;
pub mod scanner;

// Re-export commonly used types for convenience
pub use catalog::{resolve, ModelFamily, SpecificationProfile};
pub use config::AppConfig;
pub use dataset::{Dataset, DatasetSummary, EnrichedRecord};
pub use error::{PipelineError, PipelineResult};
pub use grid::Grid;
pub use labels::{Label, LabelLocale};
pub use pipeline::{run, run_pipeline, PipelineSettings};
pub use scanner::ScanSettings;
