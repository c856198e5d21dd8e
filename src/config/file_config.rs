use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub input: Option<String>,
    pub output: Option<String>,
    pub delimiter: Option<String>,
    pub analysis_year: Option<i32>,
    pub parallel: Option<bool>,
    pub labels: Option<String>,
    pub summary_json: Option<String>,

    // Feature configs
    pub scan: Option<ScanConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ScanConfig {
    pub header_zone_cells: Option<usize>,
    pub lookahead_cells: Option<usize>,
    /// e.g. "128GB"
    pub default_capacity: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
            input = "sheet.csv"
            output = "out/dataset.csv"
            delimiter = ";"
            analysis_year = 2024
            parallel = false
            labels = "turkish"
            summary_json = "out/summary.json"

            [scan]
            header_zone_cells = 10
            lookahead_cells = 3
            default_capacity = "256GB"
            "#,
        )
        .unwrap();

        assert_eq!(config.input.as_deref(), Some("sheet.csv"));
        assert_eq!(config.analysis_year, Some(2024));
        assert_eq!(config.parallel, Some(false));
        let scan = config.scan.unwrap();
        assert_eq!(scan.header_zone_cells, Some(10));
        assert_eq!(scan.lookahead_cells, Some(3));
        assert_eq!(scan.default_capacity.as_deref(), Some("256GB"));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.input.is_none());
        assert!(config.scan.is_none());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(FileConfig::load(Path::new("/nonexistent/config.toml")).is_err());
    }
}
