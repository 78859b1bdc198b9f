//! Shared input validation helpers.
//!
//! Each helper checks one documented domain constraint and returns a
//! descriptive `ValidationError` on violation. Calculators run these before
//! touching any arithmetic so that no division ever sees a non-positive
//! denominator.

use rust_decimal::Decimal;

use crate::constants::{MAX_RISK_RATING, MAX_SCORE, MIN_RISK_RATING, MIN_SCORE};
use crate::errors::{Result, ValidationError};

/// Ensures a monetary amount or rate is strictly positive.
pub fn ensure_positive(value: Decimal, field: &str) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!("{} must be positive", field)).into());
    }
    Ok(())
}

/// Ensures a monetary amount is zero or greater.
pub fn ensure_non_negative(value: Decimal, field: &str) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!("{} cannot be negative", field)).into());
    }
    Ok(())
}

/// Ensures a qualitative score lies within the inclusive [0, 5] range.
pub fn ensure_score_in_range(criterion: &str, score: i32) -> Result<()> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(ValidationError::OutOfRange(format!(
            "Score for {} must be between {} and {}",
            criterion, MIN_SCORE, MAX_SCORE
        ))
        .into());
    }
    Ok(())
}

/// Ensures a risk rating lies within the inclusive [-2, 2] range.
pub fn ensure_rating_in_range(factor: &str, rating: i32) -> Result<()> {
    if !(MIN_RISK_RATING..=MAX_RISK_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange(format!(
            "Risk rating for {} must be between {} and {}",
            factor, MIN_RISK_RATING, MAX_RISK_RATING
        ))
        .into());
    }
    Ok(())
}
