//! Market classification of a single price reading: campaign tier against
//! the column's mean price, market trend by year, and season by month.

use crate::extract::ColumnExtraction;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Debug)]
pub enum CampaignTier {
    MegaDiscount,
    LargeDiscount,
    Discount,
    PremiumPrice,
    HighPrice,
    NormalPrice,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Debug)]
pub enum MarketTrend {
    Upward,
    Stable,
    Downward,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Debug)]
pub enum Season {
    Discount,
    Summer,
    Launch,
    Normal,
}

#[derive(Clone, Copy, Eq, PartialEq, Serialize, Debug)]
pub struct MarketLabels {
    pub campaign: CampaignTier,
    pub trend: MarketTrend,
    pub season: Season,
}

/// Dataset-wide inputs to classification.
#[derive(Clone, Copy, Eq, PartialEq, Serialize, Debug)]
pub struct MarketContext {
    /// Readings from this year on are an upward trend, the year before is stable.
    pub analysis_year: i32,
}

impl MarketContext {
    pub fn new(analysis_year: i32) -> Self {
        Self { analysis_year }
    }

    /// Use `configured` when given, else the latest observation year.
    /// `None` when there is neither.
    pub fn resolve(configured: Option<i32>, extractions: &[ColumnExtraction]) -> Option<Self> {
        configured
            .or_else(|| latest_year(extractions))
            .map(Self::new)
    }
}

pub fn latest_year(extractions: &[ColumnExtraction]) -> Option<i32> {
    extractions
        .iter()
        .flat_map(|e| e.observations.iter())
        .map(|o| o.date.year())
        .max()
}

/// Checked in order, first match wins. The order matters at the shared
/// upper boundary: 1.10 must be tested before 1.05.
pub fn campaign_tier_for_ratio(ratio: f64) -> CampaignTier {
    if ratio < 0.80 {
        CampaignTier::MegaDiscount
    } else if ratio < 0.88 {
        CampaignTier::LargeDiscount
    } else if ratio < 0.95 {
        CampaignTier::Discount
    } else if ratio > 1.10 {
        CampaignTier::PremiumPrice
    } else if ratio > 1.05 {
        CampaignTier::HighPrice
    } else {
        CampaignTier::NormalPrice
    }
}

pub fn campaign_tier(price: f64, mean_price: f64) -> CampaignTier {
    if mean_price <= 0.0 || !mean_price.is_finite() {
        return CampaignTier::NormalPrice;
    }
    campaign_tier_for_ratio(price / mean_price)
}

/// Years after the analysis year count as Upward rather than falling
/// through to Downward.
pub fn market_trend(year: i32, context: &MarketContext) -> MarketTrend {
    if year >= context.analysis_year {
        MarketTrend::Upward
    } else if year == context.analysis_year.saturating_sub(1) {
        MarketTrend::Stable
    } else {
        MarketTrend::Downward
    }
}

pub fn season(month: u32) -> Season {
    match month {
        11 | 12 => Season::Discount,
        6..=8 => Season::Summer,
        9 | 10 => Season::Launch,
        _ => Season::Normal,
    }
}

pub fn classify(price: f64, mean_price: f64, date: NaiveDate, context: &MarketContext) -> MarketLabels {
    MarketLabels {
        campaign: campaign_tier(price, mean_price),
        trend: market_trend(date.year(), context),
        season: season(date.month()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Capacity;
    use crate::scanner::Observation;

    #[test]
    fn test_campaign_tier_boundaries_are_strict() {
        assert_eq!(campaign_tier_for_ratio(0.0), CampaignTier::MegaDiscount);
        assert_eq!(campaign_tier_for_ratio(0.7999), CampaignTier::MegaDiscount);
        assert_eq!(campaign_tier_for_ratio(0.80), CampaignTier::LargeDiscount);
        assert_eq!(campaign_tier_for_ratio(0.8799), CampaignTier::LargeDiscount);
        assert_eq!(campaign_tier_for_ratio(0.88), CampaignTier::Discount);
        assert_eq!(campaign_tier_for_ratio(0.9499), CampaignTier::Discount);
        assert_eq!(campaign_tier_for_ratio(0.95), CampaignTier::NormalPrice);
        assert_eq!(campaign_tier_for_ratio(1.0), CampaignTier::NormalPrice);
        assert_eq!(campaign_tier_for_ratio(1.05), CampaignTier::NormalPrice);
        assert_eq!(campaign_tier_for_ratio(1.0501), CampaignTier::HighPrice);
        assert_eq!(campaign_tier_for_ratio(1.10), CampaignTier::HighPrice);
        assert_eq!(campaign_tier_for_ratio(1.1001), CampaignTier::PremiumPrice);
        assert_eq!(campaign_tier_for_ratio(5.0), CampaignTier::PremiumPrice);
    }

    #[test]
    fn test_campaign_tier_partition_is_total() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..=300 {
            seen.insert(campaign_tier_for_ratio(i as f64 / 100.0));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_campaign_tier_from_prices() {
        assert_eq!(campaign_tier(40000.0, 50000.0), CampaignTier::LargeDiscount);
        assert_eq!(campaign_tier(56000.0, 50000.0), CampaignTier::PremiumPrice);
        assert_eq!(campaign_tier(50000.0, 0.0), CampaignTier::NormalPrice);
    }

    #[test]
    fn test_market_trend() {
        let context = MarketContext::new(2024);
        assert_eq!(market_trend(2024, &context), MarketTrend::Upward);
        assert_eq!(market_trend(2025, &context), MarketTrend::Upward);
        assert_eq!(market_trend(2023, &context), MarketTrend::Stable);
        assert_eq!(market_trend(2022, &context), MarketTrend::Downward);
        assert_eq!(market_trend(2010, &context), MarketTrend::Downward);
    }

    #[test]
    fn test_season() {
        let expected = [
            (1, Season::Normal),
            (2, Season::Normal),
            (3, Season::Normal),
            (4, Season::Normal),
            (5, Season::Normal),
            (6, Season::Summer),
            (7, Season::Summer),
            (8, Season::Summer),
            (9, Season::Launch),
            (10, Season::Launch),
            (11, Season::Discount),
            (12, Season::Discount),
        ];
        for (month, s) in expected {
            assert_eq!(season(month), s, "month {month}");
        }
    }

    fn extraction_with_years(years: &[i32]) -> ColumnExtraction {
        ColumnExtraction {
            column: 0,
            model: "iPhone 15".to_string(),
            capacity: Capacity::gb(256),
            capacity_detected: true,
            observations: years
                .iter()
                .enumerate()
                .map(|(row, y)| Observation {
                    row,
                    date: NaiveDate::from_ymd_opt(*y, 1, 1).unwrap(),
                    price: 50000.0,
                })
                .collect(),
            mean_price: 50000.0,
        }
    }

    #[test]
    fn test_context_prefers_configured_year() {
        let extractions = vec![extraction_with_years(&[2022, 2025])];
        assert_eq!(
            MarketContext::resolve(Some(2024), &extractions),
            Some(MarketContext::new(2024))
        );
    }

    #[test]
    fn test_context_falls_back_to_latest_year() {
        let extractions = vec![
            extraction_with_years(&[2022, 2023]),
            extraction_with_years(&[2024, 2021]),
        ];
        assert_eq!(
            MarketContext::resolve(None, &extractions),
            Some(MarketContext::new(2024))
        );
        assert_eq!(MarketContext::resolve(None, &[]), None);
    }

    #[test]
    fn test_classify() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 24).unwrap();
        let labels = classify(39000.0, 50000.0, date, &MarketContext::new(2024));
        assert_eq!(labels.campaign, CampaignTier::MegaDiscount);
        assert_eq!(labels.trend, MarketTrend::Stable);
        assert_eq!(labels.season, Season::Discount);
    }
}
