use serde::Serialize;
use std::fmt;

/// Multiplier from the larger storage unit to the smaller one.
pub const TB_TO_GB: u32 = 1000;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Serialize)]
pub enum StorageUnit {
    Gb,
    Tb,
}

impl StorageUnit {
    pub fn parse(s: &str) -> Option<StorageUnit> {
        match s.to_ascii_lowercase().as_str() {
            "gb" => Some(StorageUnit::Gb),
            "tb" => Some(StorageUnit::Tb),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageUnit::Gb => "GB",
            StorageUnit::Tb => "TB",
        }
    }
}

/// A storage capacity as detected in a header cell, e.g. `256GB` or `1TB`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Serialize)]
pub struct Capacity {
    pub amount: u32,
    pub unit: StorageUnit,
}

impl Capacity {
    /// Assumed when a column names a model but no capacity.
    pub const DEFAULT: Capacity = Capacity {
        amount: 128,
        unit: StorageUnit::Gb,
    };

    pub fn new(amount: u32, unit: StorageUnit) -> Self {
        Self { amount, unit }
    }

    pub fn gb(amount: u32) -> Self {
        Self::new(amount, StorageUnit::Gb)
    }

    /// Capacity normalized to gigabytes.
    pub fn in_gb(&self) -> u32 {
        match self.unit {
            StorageUnit::Gb => self.amount,
            StorageUnit::Tb => self.amount.saturating_mul(TB_TO_GB),
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_upper_case_unit() {
        assert_eq!(Capacity::gb(256).to_string(), "256GB");
        assert_eq!(Capacity::new(1, StorageUnit::Tb).to_string(), "1TB");
    }

    #[test]
    fn test_terabytes_normalize_to_gigabytes() {
        assert_eq!(Capacity::new(1, StorageUnit::Tb).in_gb(), 1000);
        assert_eq!(Capacity::new(2, StorageUnit::Tb).in_gb(), 2000);
        assert_eq!(Capacity::gb(512).in_gb(), 512);
    }

    #[test]
    fn test_unit_parse_is_case_insensitive() {
        assert_eq!(StorageUnit::parse("GB"), Some(StorageUnit::Gb));
        assert_eq!(StorageUnit::parse("tb"), Some(StorageUnit::Tb));
        assert_eq!(StorageUnit::parse("mb"), None);
    }

    #[test]
    fn test_default_is_128gb() {
        assert_eq!(Capacity::default(), Capacity::gb(128));
    }
}
