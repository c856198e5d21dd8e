//! Human-readable rendering of categorical values.
//!
//! Classification never depends on the locale; only the text written to the
//! output table does.

use crate::catalog::SimConfig;
use crate::features::{DayType, StorageTier};
use crate::market::{CampaignTier, MarketTrend, Season};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelLocale {
    #[default]
    English,
    Turkish,
}

impl LabelLocale {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Some(LabelLocale::English),
            "turkish" | "tr" => Some(LabelLocale::Turkish),
            _ => None,
        }
    }
}

pub trait Label {
    fn label(&self, locale: LabelLocale) -> &'static str;
}

impl Label for CampaignTier {
    fn label(&self, locale: LabelLocale) -> &'static str {
        match (self, locale) {
            (CampaignTier::MegaDiscount, LabelLocale::English) => "Mega Discount",
            (CampaignTier::MegaDiscount, LabelLocale::Turkish) => "Mega İndirim",
            (CampaignTier::LargeDiscount, LabelLocale::English) => "Large Discount",
            (CampaignTier::LargeDiscount, LabelLocale::Turkish) => "Büyük İndirim",
            (CampaignTier::Discount, LabelLocale::English) => "Discount",
            (CampaignTier::Discount, LabelLocale::Turkish) => "İndirim",
            (CampaignTier::PremiumPrice, LabelLocale::English) => "Premium Price",
            (CampaignTier::PremiumPrice, LabelLocale::Turkish) => "Premium Fiyat",
            (CampaignTier::HighPrice, LabelLocale::English) => "High Price",
            (CampaignTier::HighPrice, LabelLocale::Turkish) => "Yüksek Fiyat",
            (CampaignTier::NormalPrice, LabelLocale::English) => "Normal Price",
            (CampaignTier::NormalPrice, LabelLocale::Turkish) => "Normal Fiyat",
        }
    }
}

impl Label for MarketTrend {
    fn label(&self, locale: LabelLocale) -> &'static str {
        match (self, locale) {
            (MarketTrend::Upward, LabelLocale::English) => "Upward Trend",
            (MarketTrend::Upward, LabelLocale::Turkish) => "Yükseliş Trendi",
            (MarketTrend::Stable, LabelLocale::English) => "Stable Market",
            (MarketTrend::Stable, LabelLocale::Turkish) => "Stabil Pazar",
            (MarketTrend::Downward, LabelLocale::English) => "Downward Trend",
            (MarketTrend::Downward, LabelLocale::Turkish) => "Düşüş Trendi",
        }
    }
}

impl Label for Season {
    fn label(&self, locale: LabelLocale) -> &'static str {
        match (self, locale) {
            (Season::Discount, LabelLocale::English) => "Discount Season",
            (Season::Discount, LabelLocale::Turkish) => "İndirim Sezonu",
            (Season::Summer, LabelLocale::English) => "Summer Season",
            (Season::Summer, LabelLocale::Turkish) => "Yaz Sezonu",
            (Season::Launch, LabelLocale::English) => "Launch Season",
            (Season::Launch, LabelLocale::Turkish) => "Lansman Sezonu",
            (Season::Normal, LabelLocale::English) => "Normal Season",
            (Season::Normal, LabelLocale::Turkish) => "Normal Sezon",
        }
    }
}

impl Label for DayType {
    fn label(&self, locale: LabelLocale) -> &'static str {
        match (self, locale) {
            (DayType::Weekday, LabelLocale::English) => "Weekday",
            (DayType::Weekday, LabelLocale::Turkish) => "Hafta İçi",
            (DayType::Weekend, LabelLocale::English) => "Weekend",
            (DayType::Weekend, LabelLocale::Turkish) => "Hafta Sonu",
        }
    }
}

impl Label for StorageTier {
    fn label(&self, locale: LabelLocale) -> &'static str {
        match (self, locale) {
            (StorageTier::Premium, _) => "Premium",
            (StorageTier::Mid, LabelLocale::English) => "Mid",
            (StorageTier::Mid, LabelLocale::Turkish) => "Orta",
            (StorageTier::Standard, LabelLocale::English) => "Standard",
            (StorageTier::Standard, LabelLocale::Turkish) => "Standart",
        }
    }
}

impl Label for SimConfig {
    fn label(&self, locale: LabelLocale) -> &'static str {
        match (self, locale) {
            (SimConfig::Dual, LabelLocale::English) => "Dual SIM",
            (SimConfig::Dual, LabelLocale::Turkish) => "Çift Hat",
        }
    }
}

impl Label for bool {
    fn label(&self, locale: LabelLocale) -> &'static str {
        match (self, locale) {
            (true, LabelLocale::English) => "Yes",
            (true, LabelLocale::Turkish) => "Var",
            (false, LabelLocale::English) => "No",
            (false, LabelLocale::Turkish) => "Hayır",
        }
    }
}
