use anyhow::{Context, Result};
use clap::Parser;
use price_sheet_extractor::config::{AppConfig, CliConfig, FileConfig};
use price_sheet_extractor::LabelLocale;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path_buf))
}

#[derive(Parser, Debug)]
#[clap(about = "Extract a feature-enriched dataset from an irregular price sheet")]
struct CliArgs {
    /// Path to the price sheet (CSV or TSV). Optional when set in the config file.
    #[clap(value_parser = parse_path)]
    pub input: Option<PathBuf>,

    /// Path of the output table. Defaults to `<input-stem>_dataset.csv`.
    #[clap(value_parser = parse_path)]
    pub output: Option<PathBuf>,

    /// Path to a TOML config file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Reference year for market-trend labels. Defaults to the latest observed year.
    #[clap(long)]
    pub analysis_year: Option<i32>,

    /// Number of leading cells searched for a model label.
    #[clap(long)]
    pub header_zone: Option<usize>,

    /// Number of cells, starting at a date, searched for its price.
    #[clap(long)]
    pub lookahead: Option<usize>,

    /// Capacity used when a label names no capacity, e.g. "128GB".
    #[clap(long)]
    pub default_capacity: Option<String>,

    /// Field delimiter of the input ("tab" for TSV). Inferred from the extension by default.
    #[clap(long)]
    pub delimiter: Option<String>,

    /// Scan columns on a single thread.
    #[clap(long)]
    pub sequential: bool,

    /// Language of categorical labels in the output.
    #[clap(long, value_enum)]
    pub labels: Option<LabelLocale>,

    /// Also write the dataset summary as JSON to this path.
    #[clap(long, value_parser = parse_path)]
    pub summary_json: Option<PathBuf>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            delimiter: self.delimiter.clone(),
            analysis_year: self.analysis_year,
            header_zone_cells: self.header_zone,
            lookahead_cells: self.lookahead,
            default_capacity: self.default_capacity.clone(),
            sequential: self.sequential,
            labels: self.labels,
            summary_json: self.summary_json.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let dataset = price_sheet_extractor::run(&config)
        .with_context(|| format!("Failed to process {:?}", config.input))?;

    info!(
        "Done: {} records written to {:?}",
        dataset.len(),
        config.output
    );
    Ok(())
}
