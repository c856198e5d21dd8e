//! Per-observation derived metrics: performance score, price/performance,
//! product age, day type and storage tier.

use crate::catalog::{Capacity, SpecificationProfile};
use crate::scanner::Observation;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

pub const FALLBACK_RAM_GB: f64 = 4.0;
pub const FALLBACK_BATTERY_MAH: f64 = 3000.0;
pub const FALLBACK_CPU_FREQUENCY_GHZ: f64 = 3.0;
pub const FALLBACK_BENCHMARK_SCORE: f64 = 120.0;

/// New hardware ships every year on this month/day; product age counts from it.
pub const LAUNCH_ANCHOR_MONTH: u32 = 9;
pub const LAUNCH_ANCHOR_DAY: u32 = 1;

const DAYS_PER_MONTH: i64 = 30;

const PREMIUM_MARKER: &str = "512GB";
const MID_MARKER: &str = "256GB";

#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Debug)]
pub enum DayType {
    Weekday,
    Weekend,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Debug)]
pub enum StorageTier {
    Premium,
    Mid,
    Standard,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedFeatures {
    pub performance_score: f64,
    pub price_performance_ratio: f64,
    /// `None` only if the launch anchor is not a representable date.
    pub product_age_days: Option<i64>,
    pub product_age_months: Option<i64>,
    pub day_type: DayType,
    pub storage_tier: StorageTier,
}

/// `benchmark * 0.4 + ram * 10 + battery / 100 + cpu_ghz * 20`.
///
/// Always positive: every input is either a positive catalog value or a
/// positive fallback.
pub fn performance_score(profile: &SpecificationProfile) -> f64 {
    let positive_or = |v: f64, fallback: f64| if v > 0.0 { v } else { fallback };
    let benchmark = positive_or(profile.benchmark_score, FALLBACK_BENCHMARK_SCORE);
    let ram = positive_or(profile.ram_gb, FALLBACK_RAM_GB);
    let battery = positive_or(profile.battery_mah, FALLBACK_BATTERY_MAH);
    let cpu = profile
        .cpu_frequency_ghz
        .map(|ghz| positive_or(ghz, FALLBACK_CPU_FREQUENCY_GHZ))
        .unwrap_or(FALLBACK_CPU_FREQUENCY_GHZ);

    benchmark * 0.4 + ram * 10.0 + battery / 100.0 + cpu * 20.0
}

pub fn launch_anchor(launch_year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(launch_year, LAUNCH_ANCHOR_MONTH, LAUNCH_ANCHOR_DAY)
}

/// Days from the launch anchor to `date`; negative before launch.
pub fn product_age_days(date: NaiveDate, launch_year: i32) -> Option<i64> {
    launch_anchor(launch_year).map(|anchor| (date - anchor).num_days())
}

/// Floor division by 30; monotonic, not calendar-accurate.
pub fn product_age_months(age_days: i64) -> i64 {
    age_days.div_euclid(DAYS_PER_MONTH)
}

pub fn day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

/// 512 is checked before 256, so text carrying both markers is Premium.
pub fn storage_tier(capacity_text: &str) -> StorageTier {
    let text = capacity_text.to_ascii_uppercase();
    if text.contains(PREMIUM_MARKER) {
        StorageTier::Premium
    } else if text.contains(MID_MARKER) {
        StorageTier::Mid
    } else {
        StorageTier::Standard
    }
}

pub fn derive(
    observation: &Observation,
    profile: &SpecificationProfile,
    capacity: Capacity,
) -> DerivedFeatures {
    let performance_score = performance_score(profile);
    let product_age_days = product_age_days(observation.date, profile.launch_year);
    DerivedFeatures {
        performance_score,
        price_performance_ratio: observation.price / performance_score,
        product_age_days,
        product_age_months: product_age_days.map(product_age_months),
        day_type: day_type(observation.date),
        storage_tier: storage_tier(&capacity.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{resolve, DEFAULT_PROFILE, IPHONE_15};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_performance_score_formula() {
        // 145 * 0.4 + 6 * 10 + 3349 / 100 + 3.46 * 20
        let expected = 58.0 + 60.0 + 33.49 + 69.2;
        assert!((performance_score(&IPHONE_15) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_default_profile_uses_fallbacks() {
        // 120 * 0.4 + 4 * 10 + 3000 / 100 + 3.0 * 20
        assert!((performance_score(&DEFAULT_PROFILE) - 178.0).abs() < 1e-9);
    }

    #[test]
    fn test_performance_score_positive_for_every_profile() {
        for id in ["iPhone 13", "iPhone 14", "iPhone 15", "iPhone 16", "Nokia 3310", ""] {
            assert!(performance_score(&resolve(id, None)) > 0.0);
        }
        let mut broken = DEFAULT_PROFILE.clone();
        broken.ram_gb = 0.0;
        broken.battery_mah = -1.0;
        broken.benchmark_score = 0.0;
        broken.cpu_frequency_ghz = Some(0.0);
        assert!((performance_score(&broken) - 178.0).abs() < 1e-9);
    }

    #[test]
    fn test_product_age() {
        assert_eq!(product_age_days(date(2023, 9, 1), 2023), Some(0));
        assert_eq!(product_age_days(date(2024, 9, 1), 2023), Some(366));
        assert_eq!(product_age_days(date(2023, 8, 31), 2023), Some(-1));
    }

    #[test]
    fn test_product_age_months_floors() {
        assert_eq!(product_age_months(0), 0);
        assert_eq!(product_age_months(29), 0);
        assert_eq!(product_age_months(30), 1);
        assert_eq!(product_age_months(366), 12);
        assert_eq!(product_age_months(-1), -1);
        assert_eq!(product_age_months(-30), -1);
        assert_eq!(product_age_months(-31), -2);
    }

    #[test]
    fn test_day_type() {
        // 2024-09-07 is a Saturday
        assert_eq!(day_type(date(2024, 9, 7)), DayType::Weekend);
        assert_eq!(day_type(date(2024, 9, 8)), DayType::Weekend);
        assert_eq!(day_type(date(2024, 9, 9)), DayType::Weekday);
        assert_eq!(day_type(date(2024, 9, 6)), DayType::Weekday);
    }

    #[test]
    fn test_storage_tier_priority() {
        assert_eq!(storage_tier("512GB"), StorageTier::Premium);
        assert_eq!(storage_tier("256gb"), StorageTier::Mid);
        assert_eq!(storage_tier("128GB"), StorageTier::Standard);
        assert_eq!(storage_tier("1TB"), StorageTier::Standard);
        assert_eq!(storage_tier("256GB / 512GB"), StorageTier::Premium);
        assert_eq!(storage_tier("512GB / 256GB"), StorageTier::Premium);
    }

    #[test]
    fn test_derive() {
        let observation = Observation {
            row: 1,
            date: date(2024, 9, 1),
            price: 55000.0,
        };
        let profile = resolve("iPhone 15", Some(Capacity::gb(256)));
        let features = derive(&observation, &profile, Capacity::gb(256));

        assert_eq!(features.storage_tier, StorageTier::Mid);
        assert_eq!(features.day_type, DayType::Weekend);
        assert_eq!(features.product_age_days, Some(366));
        assert_eq!(features.product_age_months, Some(12));
        assert!(
            (features.price_performance_ratio * features.performance_score - 55000.0).abs() < 1e-6
        );
    }
}
