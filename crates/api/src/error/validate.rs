//! Validation utilities shared by the estimator crates

use super::types::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: reason.into(),
        });
    }
    Ok(())
}

/// Validate that an integer parameter is strictly positive
#[inline(always)]
pub fn positive(value: u64, context: &'static str) -> Result<()> {
    parameter(value != 0, context, "must be strictly positive")
}

/// Validate that a computed quantity is a finite number
#[inline(always)]
pub fn finite(value: f64, context: &'static str) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::Estimation {
            context,
            message: format!("non-finite value {}", value),
        });
    }
    Ok(())
}
