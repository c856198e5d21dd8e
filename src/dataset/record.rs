use crate::catalog::{Capacity, SpecificationProfile};
use crate::features::DerivedFeatures;
use crate::market::MarketLabels;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One price reading joined with its model profile and every derived label.
///
/// Built once during assembly and never modified; a correction means
/// re-running extraction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnrichedRecord {
    /// Source column and date row in the input grid.
    pub column: usize,
    pub row: usize,
    pub date: NaiveDate,
    pub brand: &'static str,
    pub model: String,
    pub capacity: Capacity,
    /// False when the header named no capacity and the default was assumed.
    pub capacity_detected: bool,
    pub price: f64,
    pub profile: SpecificationProfile,
    pub features: DerivedFeatures,
    pub market: MarketLabels,
}

impl EnrichedRecord {
    pub fn capacity_text(&self) -> String {
        self.capacity.to_string()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Monday is 0.
    pub fn weekday_index(&self) -> u32 {
        self.date.weekday().num_days_from_monday()
    }
}
