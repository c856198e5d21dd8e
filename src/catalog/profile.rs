use crate::features::{FALLBACK_BATTERY_MAH, FALLBACK_BENCHMARK_SCORE, FALLBACK_RAM_GB};
use serde::Serialize;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Debug)]
pub enum ModelFamily {
    Iphone13,
    Iphone14,
    Iphone15,
    Iphone16,
}

impl ModelFamily {
    /// Families in the order they are tried when resolving an identifier.
    pub const ALL: [ModelFamily; 4] = [
        ModelFamily::Iphone13,
        ModelFamily::Iphone14,
        ModelFamily::Iphone15,
        ModelFamily::Iphone16,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ModelFamily::Iphone13 => "iPhone 13",
            ModelFamily::Iphone14 => "iPhone 14",
            ModelFamily::Iphone15 => "iPhone 15",
            ModelFamily::Iphone16 => "iPhone 16",
        }
    }

    pub fn profile(&self) -> &'static SpecificationProfile {
        match self {
            ModelFamily::Iphone13 => &IPHONE_13,
            ModelFamily::Iphone14 => &IPHONE_14,
            ModelFamily::Iphone15 => &IPHONE_15,
            ModelFamily::Iphone16 => &IPHONE_16,
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Serialize, Debug)]
pub enum SimConfig {
    Dual,
}

/// Boolean and enumerated capability flags of a handset.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct Capabilities {
    pub supports_5g: bool,
    pub supports_4_5g: bool,
    pub water_resistant: bool,
    pub water_resistance_level: &'static str,
    pub wireless_charging: bool,
    pub usb_c: bool,
    pub ai_chip: bool,
}

/// Fixed technical attributes of a model family.
///
/// Attributes that are unknown for the default profile are `None`; the
/// feature engine substitutes its fallback constants where a formula needs
/// them and the table writer leaves the cell empty.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct SpecificationProfile {
    pub family: Option<ModelFamily>,
    pub screen_size_in: f64,
    /// Nominal storage; replaced by the detected capacity on resolve.
    pub storage_gb: u32,
    pub ram_gb: f64,
    pub battery_mah: f64,
    pub fast_charge_w: u32,
    pub cpu_frequency_ghz: Option<f64>,
    pub cpu_cores: Option<u32>,
    pub camera_mp: Option<u32>,
    pub screen_resolution: Option<&'static str>,
    pub refresh_rate_hz: Option<u32>,
    pub chipset: &'static str,
    pub benchmark_score: f64,
    pub ios_version: Option<&'static str>,
    pub upgradable_ios: Option<&'static str>,
    pub launch_year: i32,
    pub overall_score: f64,
    pub sar_value: f64,
    pub screen_to_body_ratio: f64,
    pub sim: SimConfig,
    pub capabilities: Capabilities,
}

const LEGACY_CAPABILITIES: Capabilities = Capabilities {
    supports_5g: true,
    supports_4_5g: true,
    water_resistant: true,
    water_resistance_level: "IPX8",
    wireless_charging: true,
    usb_c: false,
    ai_chip: false,
};

pub static IPHONE_13: SpecificationProfile = SpecificationProfile {
    family: Some(ModelFamily::Iphone13),
    screen_size_in: 6.1,
    storage_gb: 128,
    ram_gb: 4.0,
    battery_mah: 3227.0,
    fast_charge_w: 20,
    cpu_frequency_ghz: Some(3.2),
    cpu_cores: Some(6),
    camera_mp: Some(12),
    screen_resolution: Some("1170x2532"),
    refresh_rate_hz: Some(60),
    chipset: "Apple A15 Bionic",
    benchmark_score: 125.0,
    ios_version: Some("iOS 15"),
    upgradable_ios: Some("iOS 18"),
    launch_year: 2021,
    overall_score: 125.0,
    sar_value: 0.98,
    screen_to_body_ratio: 85.62,
    sim: SimConfig::Dual,
    capabilities: LEGACY_CAPABILITIES,
};

pub static IPHONE_14: SpecificationProfile = SpecificationProfile {
    family: Some(ModelFamily::Iphone14),
    screen_size_in: 6.1,
    storage_gb: 256,
    ram_gb: 6.0,
    battery_mah: 3279.0,
    fast_charge_w: 20,
    cpu_frequency_ghz: Some(3.2),
    cpu_cores: Some(6),
    camera_mp: Some(12),
    screen_resolution: Some("1170x2532"),
    refresh_rate_hz: Some(60),
    chipset: "Apple A15 Bionic",
    benchmark_score: 133.0,
    ios_version: Some("iOS 16"),
    upgradable_ios: Some("iOS 18"),
    launch_year: 2022,
    overall_score: 133.0,
    sar_value: 0.98,
    screen_to_body_ratio: 85.62,
    sim: SimConfig::Dual,
    capabilities: LEGACY_CAPABILITIES,
};

pub static IPHONE_15: SpecificationProfile = SpecificationProfile {
    family: Some(ModelFamily::Iphone15),
    screen_size_in: 6.1,
    storage_gb: 256,
    ram_gb: 6.0,
    battery_mah: 3349.0,
    fast_charge_w: 20,
    cpu_frequency_ghz: Some(3.46),
    cpu_cores: Some(6),
    camera_mp: Some(48),
    screen_resolution: Some("1179x2556"),
    refresh_rate_hz: Some(60),
    chipset: "Apple A16 Bionic",
    benchmark_score: 145.0,
    ios_version: Some("iOS 17"),
    upgradable_ios: Some("iOS 18"),
    launch_year: 2023,
    overall_score: 145.0,
    sar_value: 0.98,
    screen_to_body_ratio: 85.55,
    sim: SimConfig::Dual,
    capabilities: Capabilities {
        usb_c: true,
        ..LEGACY_CAPABILITIES
    },
};

pub static IPHONE_16: SpecificationProfile = SpecificationProfile {
    family: Some(ModelFamily::Iphone16),
    screen_size_in: 6.1,
    storage_gb: 256,
    ram_gb: 8.0,
    battery_mah: 3561.0,
    fast_charge_w: 25,
    cpu_frequency_ghz: Some(4.04),
    cpu_cores: Some(6),
    camera_mp: Some(48),
    screen_resolution: Some("1179x2556"),
    refresh_rate_hz: Some(60),
    chipset: "Apple A18",
    benchmark_score: 147.0,
    ios_version: Some("iOS 18"),
    upgradable_ios: Some("iOS 18"),
    launch_year: 2024,
    overall_score: 147.0,
    sar_value: 1.24,
    screen_to_body_ratio: 85.55,
    sim: SimConfig::Dual,
    capabilities: Capabilities {
        usb_c: true,
        ai_chip: true,
        ..LEGACY_CAPABILITIES
    },
};

/// Profile for identifiers that match no known family.
pub static DEFAULT_PROFILE: SpecificationProfile = SpecificationProfile {
    family: None,
    screen_size_in: 6.1,
    storage_gb: 128,
    ram_gb: FALLBACK_RAM_GB,
    battery_mah: FALLBACK_BATTERY_MAH,
    fast_charge_w: 20,
    cpu_frequency_ghz: None,
    cpu_cores: None,
    camera_mp: None,
    screen_resolution: None,
    refresh_rate_hz: None,
    chipset: "Apple A15",
    benchmark_score: FALLBACK_BENCHMARK_SCORE,
    ios_version: None,
    upgradable_ios: None,
    launch_year: 2021,
    overall_score: FALLBACK_BENCHMARK_SCORE,
    sar_value: 0.98,
    screen_to_body_ratio: 85.0,
    sim: SimConfig::Dual,
    capabilities: LEGACY_CAPABILITIES,
};
