mod file_config;

pub use file_config::{FileConfig, ScanConfig};

use crate::catalog::Capacity;
use crate::grid::delimiter_for_path;
use crate::labels::LabelLocale;
use crate::pipeline::PipelineSettings;
use crate::scanner::matchers::match_capacity;
use crate::scanner::ScanSettings;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub delimiter: Option<String>,
    pub analysis_year: Option<i32>,
    pub header_zone_cells: Option<usize>,
    pub lookahead_cells: Option<usize>,
    pub default_capacity: Option<String>,
    pub sequential: bool,
    pub labels: Option<LabelLocale>,
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiter: u8,
    pub scan: ScanSettings,
    /// Market-trend reference year; derived from the data when absent.
    pub analysis_year: Option<i32>,
    pub parallel: bool,
    pub labels: LabelLocale,
    pub summary_json: Option<PathBuf>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let input = file
            .input
            .map(PathBuf::from)
            .or_else(|| cli.input.clone())
            .ok_or_else(|| anyhow::anyhow!("input must be specified as an argument or in config file"))?;

        let output = file
            .output
            .map(PathBuf::from)
            .or_else(|| cli.output.clone())
            .unwrap_or_else(|| default_output_path(&input));

        if output == input {
            bail!("Output path must differ from input path: {:?}", output);
        }

        let delimiter = match file.delimiter.or_else(|| cli.delimiter.clone()) {
            Some(s) => parse_delimiter(&s)?,
            None => delimiter_for_path(&input),
        };

        let scan_file = file.scan.unwrap_or_default();
        let defaults = ScanSettings::default();
        let header_zone_cells = scan_file
            .header_zone_cells
            .or(cli.header_zone_cells)
            .unwrap_or(defaults.header_zone_cells);
        let lookahead_cells = scan_file
            .lookahead_cells
            .or(cli.lookahead_cells)
            .unwrap_or(defaults.lookahead_cells);
        if header_zone_cells == 0 {
            bail!("header_zone_cells must be at least 1");
        }
        if lookahead_cells == 0 {
            bail!("lookahead_cells must be at least 1");
        }
        let default_capacity = match scan_file
            .default_capacity
            .or_else(|| cli.default_capacity.clone())
        {
            Some(s) => parse_capacity(&s)?,
            None => defaults.default_capacity,
        };

        let labels = match file.labels {
            Some(s) => match LabelLocale::parse(&s) {
                Some(locale) => locale,
                None => bail!("Unknown labels locale in config file: {}", s),
            },
            None => cli.labels.unwrap_or_default(),
        };

        let parallel = file.parallel.unwrap_or(!cli.sequential);
        let analysis_year = file.analysis_year.or(cli.analysis_year);
        let summary_json = file
            .summary_json
            .map(PathBuf::from)
            .or_else(|| cli.summary_json.clone());

        Ok(Self {
            input,
            output,
            delimiter,
            scan: ScanSettings {
                header_zone_cells,
                lookahead_cells,
                default_capacity,
            },
            analysis_year,
            parallel,
            labels,
            summary_json,
        })
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            scan: self.scan.clone(),
            analysis_year: self.analysis_year,
            parallel: self.parallel,
        }
    }
}

/// `<input-stem>_dataset.csv` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "prices".to_string());
    input.with_file_name(format!("{stem}_dataset.csv"))
}

fn parse_delimiter(s: &str) -> Result<u8> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let bytes = s.as_bytes();
            if bytes.len() != 1 || !bytes[0].is_ascii() {
                bail!("Delimiter must be a single ASCII character, got {:?}", s);
            }
            Ok(bytes[0])
        }
    }
}

fn parse_capacity(s: &str) -> Result<Capacity> {
    match match_capacity(s) {
        Some(capacity) if capacity.amount > 0 => Ok(capacity),
        _ => bail!("Invalid default capacity {:?}, expected e.g. \"128GB\"", s),
    }
}
