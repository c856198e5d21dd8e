//! Flat table output: one row per record, UTF-8 CSV with a header row.

use super::{Dataset, DatasetSummary, EnrichedRecord};
use crate::error::{PipelineError, PipelineResult};
use crate::labels::{Label, LabelLocale};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

pub const HEADERS: [&str; 45] = [
    "DATE",
    "BRAND",
    "MODEL",
    "CAPACITY",
    "PRICE",
    "SCREEN_SIZE",
    "STORAGE_GB",
    "RAM_GB",
    "BATTERY_MAH",
    "FAST_CHARGE_W",
    "CPU_FREQUENCY_GHZ",
    "CPU_CORES",
    "CAMERA_MP",
    "SCREEN_RESOLUTION",
    "REFRESH_RATE_HZ",
    "CHIPSET",
    "BENCHMARK_SCORE",
    "IOS_VERSION",
    "UPGRADABLE_IOS",
    "SUPPORTS_5G",
    "SUPPORTS_4_5G",
    "WATER_RESISTANT",
    "WATER_RESISTANCE_LEVEL",
    "WIRELESS_CHARGING",
    "USB_C",
    "AI_CHIP",
    "SAR_VALUE",
    "SCREEN_TO_BODY_RATIO",
    "SIM_SLOTS",
    "PERFORMANCE_SCORE",
    "PRICE_PERFORMANCE_RATIO",
    "PRODUCT_AGE_MONTHS",
    "PRODUCT_AGE_DAYS",
    "LAUNCH_YEAR",
    "CAMPAIGN_TIER",
    "MARKET_TREND",
    "SEASONAL_LABEL",
    "DAY_TYPE",
    "YEAR",
    "MONTH",
    "DAY",
    "WEEKDAY",
    "STORAGE_TIER",
    "OVERALL_SCORE",
    "CAPACITY_DETECTED",
];

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn record_row(record: &EnrichedRecord, locale: LabelLocale) -> Vec<String> {
    let profile = &record.profile;
    let caps = &profile.capabilities;
    let features = &record.features;
    vec![
        record.date.format("%d.%m.%Y").to_string(),
        record.brand.to_string(),
        record.model.clone(),
        record.capacity_text(),
        two_decimals(record.price),
        profile.screen_size_in.to_string(),
        profile.storage_gb.to_string(),
        profile.ram_gb.to_string(),
        profile.battery_mah.to_string(),
        profile.fast_charge_w.to_string(),
        opt(profile.cpu_frequency_ghz),
        opt(profile.cpu_cores),
        opt(profile.camera_mp),
        opt(profile.screen_resolution),
        opt(profile.refresh_rate_hz),
        profile.chipset.to_string(),
        profile.benchmark_score.to_string(),
        opt(profile.ios_version),
        opt(profile.upgradable_ios),
        caps.supports_5g.label(locale).to_string(),
        caps.supports_4_5g.label(locale).to_string(),
        caps.water_resistant.label(locale).to_string(),
        caps.water_resistance_level.to_string(),
        caps.wireless_charging.label(locale).to_string(),
        caps.usb_c.label(locale).to_string(),
        caps.ai_chip.label(locale).to_string(),
        profile.sar_value.to_string(),
        profile.screen_to_body_ratio.to_string(),
        profile.sim.label(locale).to_string(),
        two_decimals(features.performance_score),
        two_decimals(features.price_performance_ratio),
        opt(features.product_age_months),
        opt(features.product_age_days),
        profile.launch_year.to_string(),
        record.market.campaign.label(locale).to_string(),
        record.market.trend.label(locale).to_string(),
        record.market.season.label(locale).to_string(),
        features.day_type.label(locale).to_string(),
        record.year().to_string(),
        record.month().to_string(),
        record.day().to_string(),
        record.weekday_index().to_string(),
        features.storage_tier.label(locale).to_string(),
        profile.overall_score.to_string(),
        record.capacity_detected.label(locale).to_string(),
    ]
}

/// Write the whole table to any writer.
pub fn write_table<W: Write>(writer: W, dataset: &Dataset, locale: LabelLocale) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADERS)?;
    for record in dataset.records() {
        csv_writer.write_record(record_row(record, locale))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn persist_atomically<F>(path: &Path, write: F) -> PipelineResult<()>
where
    F: FnOnce(&mut NamedTempFile) -> std::io::Result<()>,
{
    let output_error = |source: std::io::Error| PipelineError::Output {
        path: path.to_owned(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(output_error)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(output_error)?;
    write(&mut tmp).map_err(output_error)?;
    tmp.persist(path).map_err(|e| output_error(e.error))?;
    Ok(())
}

/// Write the table to `path`. Nothing appears at `path` unless the whole
/// table was written.
pub fn write_dataset(path: &Path, dataset: &Dataset, locale: LabelLocale) -> PipelineResult<()> {
    persist_atomically(path, |tmp| {
        write_table(tmp, dataset, locale).map_err(std::io::Error::from)
    })?;
    info!("Wrote {} records to {}", dataset.len(), path.display());
    Ok(())
}

pub fn write_summary_json(path: &Path, summary: &DatasetSummary) -> PipelineResult<()> {
    persist_atomically(path, |tmp| {
        serde_json::to_writer_pretty(&mut *tmp, summary).map_err(std::io::Error::from)?;
        writeln!(tmp)
    })?;
    info!("Wrote dataset summary to {}", path.display());
    Ok(())
}
