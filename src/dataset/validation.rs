//! Structural completeness checks for assembled records.
//!
//! A failure here means an upstream component broke its contract; records
//! are never repaired or dropped at this stage.

use super::EnrichedRecord;
use std::fmt;

/// Validation error types
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyField {
        column: usize,
        row: usize,
        field: &'static str,
    },
    NonFiniteValue {
        column: usize,
        row: usize,
        field: &'static str,
        value: f64,
    },
    NonPositiveValue {
        column: usize,
        row: usize,
        field: &'static str,
        value: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyField { column, row, field } => write!(
                f,
                "Field '{}' is required but was empty (column {}, row {})",
                field, column, row
            ),
            ValidationError::NonFiniteValue {
                column,
                row,
                field,
                value,
            } => write!(
                f,
                "Field '{}' must be finite, got {} (column {}, row {})",
                field, value, column, row
            ),
            ValidationError::NonPositiveValue {
                column,
                row,
                field,
                value,
            } => write!(
                f,
                "Field '{}' must be positive, got {} (column {}, row {})",
                field, value, column, row
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

fn require_text(record: &EnrichedRecord, field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            column: record.column,
            row: record.row,
            field,
        });
    }
    Ok(())
}

fn require_present<T>(record: &EnrichedRecord, field: &'static str, value: Option<T>) -> ValidationResult<()> {
    if value.is_none() {
        return Err(ValidationError::EmptyField {
            column: record.column,
            row: record.row,
            field,
        });
    }
    Ok(())
}

fn require_finite(record: &EnrichedRecord, field: &'static str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue {
            column: record.column,
            row: record.row,
            field,
            value,
        });
    }
    Ok(())
}

fn require_positive(record: &EnrichedRecord, field: &'static str, value: f64) -> ValidationResult<()> {
    require_finite(record, field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue {
            column: record.column,
            row: record.row,
            field,
            value,
        });
    }
    Ok(())
}

/// Validate an enriched record
pub fn validate_record(record: &EnrichedRecord) -> ValidationResult<()> {
    require_text(record, "brand", record.brand)?;
    require_text(record, "model", &record.model)?;
    require_positive(record, "capacity", record.capacity.amount as f64)?;
    require_positive(record, "price", record.price)?;
    require_text(record, "chipset", record.profile.chipset)?;
    require_positive(record, "performance_score", record.features.performance_score)?;
    require_finite(
        record,
        "price_performance_ratio",
        record.features.price_performance_ratio,
    )?;
    require_present(record, "product_age_days", record.features.product_age_days)?;
    require_present(record, "product_age_months", record.features.product_age_months)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{resolve, Capacity};
    use crate::features::{DayType, DerivedFeatures, StorageTier};
    use crate::market::{CampaignTier, MarketLabels, MarketTrend, Season};
    use chrono::NaiveDate;

    fn make_valid_record() -> EnrichedRecord {
        EnrichedRecord {
            column: 2,
            row: 5,
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            brand: "iPhone",
            model: "iPhone 15".to_string(),
            capacity: Capacity::gb(256),
            capacity_detected: true,
            price: 55000.0,
            profile: resolve("iPhone 15", Some(Capacity::gb(256))),
            features: DerivedFeatures {
                performance_score: 220.69,
                price_performance_ratio: 249.22,
                product_age_days: Some(366),
                product_age_months: Some(12),
                day_type: DayType::Weekend,
                storage_tier: StorageTier::Mid,
            },
            market: MarketLabels {
                campaign: CampaignTier::NormalPrice,
                trend: MarketTrend::Upward,
                season: Season::Launch,
            },
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(validate_record(&make_valid_record()).is_ok());
    }

    #[test]
    fn test_empty_model() {
        let mut record = make_valid_record();
        record.model = "  ".to_string();
        assert_eq!(
            validate_record(&record),
            Err(ValidationError::EmptyField {
                column: 2,
                row: 5,
                field: "model"
            })
        );
    }

    #[test]
    fn test_non_positive_price() {
        let mut record = make_valid_record();
        record.price = 0.0;
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::NonPositiveValue { field: "price", .. })
        ));
    }

    #[test]
    fn test_non_finite_ratio() {
        let mut record = make_valid_record();
        record.features.price_performance_ratio = f64::NAN;
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::NonFiniteValue {
                field: "price_performance_ratio",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_age() {
        let mut record = make_valid_record();
        record.features.product_age_days = None;
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::EmptyField {
                field: "product_age_days",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_performance_score() {
        let mut record = make_valid_record();
        record.features.performance_score = 0.0;
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::NonPositiveValue {
                field: "performance_score",
                ..
            })
        ));
    }

    #[test]
    fn test_display() {
        let err = ValidationError::EmptyField {
            column: 1,
            row: 3,
            field: "model",
        };
        assert_eq!(
            err.to_string(),
            "Field 'model' is required but was empty (column 1, row 3)"
        );
    }
}
