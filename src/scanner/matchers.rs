//! Cell matchers for the three things a price sheet column can tell us.
//!
//! Grammars (case-insensitive for the model matchers):
//! - model, full form:     `iphone <generation> <capacity>[gb|tb]`
//! - model, fallback form: `iphone <generation>`, capacity searched separately
//! - capacity:             `<digits> gb|tb`
//! - date:                 `DD.MM.YYYY`
//! - price:                four or more digits, a dot, two digits

use crate::catalog::{Capacity, StorageUnit};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

pub const BRAND: &str = "iPhone";

lazy_static! {
    static ref MODEL_FULL: Regex = Regex::new(r"(?i)iphone\s*(\d+)\s+(\d+)\s*(gb|tb)?\b")
        .expect("Invalid Regex, this should be fixed at compile time.");
    static ref MODEL_GENERATION: Regex = Regex::new(r"(?i)iphone\s*(\d+)")
        .expect("Invalid Regex, this should be fixed at compile time.");
    static ref CAPACITY: Regex = Regex::new(r"(?i)\b(\d+)\s*(gb|tb)\b")
        .expect("Invalid Regex, this should be fixed at compile time.");
    static ref DATE: Regex = Regex::new(r"(\d{2})\.(\d{2})\.(\d{4})")
        .expect("Invalid Regex, this should be fixed at compile time.");
    static ref PRICE: Regex = Regex::new(r"\d{4,}\.\d{2}")
        .expect("Invalid Regex, this should be fixed at compile time.");
}

/// A model identifier found in a header cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelMatch {
    /// Canonical identifier, e.g. `iPhone 15`.
    pub model: String,
    pub capacity: Capacity,
    /// False when `capacity` is the assumed default.
    pub capacity_detected: bool,
}

/// Empty cells and spreadsheet `nan` placeholders carry no information.
pub fn is_placeholder(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || trimmed == "nan" || trimmed == "NaN"
}

fn canonical_model(generation: &str) -> Option<String> {
    let generation: u32 = generation.parse().ok()?;
    Some(format!("{BRAND} {generation}"))
}

/// A zero capacity is not a capacity; the cell is treated as malformed.
fn parse_capacity(amount: &str, unit: Option<&str>) -> Option<Capacity> {
    let amount: u32 = amount.parse().ok().filter(|&a| a > 0)?;
    let unit = match unit {
        Some(u) => StorageUnit::parse(u)?,
        None => StorageUnit::Gb,
    };
    Some(Capacity::new(amount, unit))
}

/// Standalone capacity search, e.g. `"Pro 256 GB"` -> `256GB`.
pub fn match_capacity(cell: &str) -> Option<Capacity> {
    let caps = CAPACITY.captures(cell)?;
    parse_capacity(&caps[1], Some(&caps[2]))
}

/// Try the full form first, then the generation-only form.
pub fn match_model(cell: &str, default_capacity: Capacity) -> Option<ModelMatch> {
    if is_placeholder(cell) {
        return None;
    }

    if let Some(caps) = MODEL_FULL.captures(cell) {
        let model = canonical_model(&caps[1]);
        let capacity = parse_capacity(&caps[2], caps.get(3).map(|m| m.as_str()));
        if let (Some(model), Some(capacity)) = (model, capacity) {
            return Some(ModelMatch {
                model,
                capacity,
                capacity_detected: true,
            });
        }
    }

    let caps = MODEL_GENERATION.captures(cell)?;
    let model = canonical_model(&caps[1])?;
    let (capacity, capacity_detected) = match match_capacity(cell) {
        Some(capacity) => (capacity, true),
        None => (default_capacity, false),
    };
    Some(ModelMatch {
        model,
        capacity,
        capacity_detected,
    })
}

/// First `DD.MM.YYYY` in the cell that is a real calendar date.
pub fn match_date(cell: &str) -> Option<NaiveDate> {
    if is_placeholder(cell) {
        return None;
    }
    let caps = DATE.captures(cell)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Zero and overflowing amounts (`0000.00`, hundreds of digits) are not prices.
pub fn match_price(cell: &str) -> Option<f64> {
    if is_placeholder(cell) {
        return None;
    }
    PRICE
        .find(cell)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}
