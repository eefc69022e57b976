// src/services/validation.rs
use thiserror::Error;

use crate::models::InputParameters;

pub const CONVERSION_RATE_RANGE: (f64, f64) = (0.01, 0.80);
pub const GROSS_MARGIN_RANGE: (f64, f64) = (0.10, 0.90);
pub const LEVER_RANGE: (f64, f64) = (0.0, 0.50);
pub const OPEN_DAYS_RANGE: (u32, u32) = (1, 7);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("open_days_per_week must be between 1 and 7 (got {0})")]
    OpenDays(u32),

    #[error("store_count must be at least 1")]
    NoStores,
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

fn within(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, value, min, max });
    }
    Ok(())
}

/// Checks a snapshot against the ranges the input controls allow.
/// Returns the first violation found, in field order.
pub fn validate(inputs: &InputParameters) -> Result<(), ValidationError> {
    non_negative("visitors_per_day", inputs.visitors_per_day)?;
    within("conversion_rate", inputs.conversion_rate, CONVERSION_RATE_RANGE)?;
    non_negative("average_ticket_value", inputs.average_ticket_value)?;

    let (min_days, max_days) = OPEN_DAYS_RANGE;
    if !(min_days..=max_days).contains(&inputs.open_days_per_week) {
        return Err(ValidationError::OpenDays(inputs.open_days_per_week));
    }

    non_negative("capital_expense", inputs.capital_expense)?;
    non_negative("monthly_subscription", inputs.monthly_subscription)?;
    within("gross_margin", inputs.gross_margin, GROSS_MARGIN_RANGE)?;
    within("conversion_uplift", inputs.conversion_uplift, LEVER_RANGE)?;
    within("price_uplift", inputs.price_uplift, LEVER_RANGE)?;
    within("saturday_revenue_share", inputs.saturday_revenue_share, LEVER_RANGE)?;
    within("saturday_conversion_boost", inputs.saturday_conversion_boost, LEVER_RANGE)?;

    if inputs.store_count == 0 {
        return Err(ValidationError::NoStores);
    }
    Ok(())
}
