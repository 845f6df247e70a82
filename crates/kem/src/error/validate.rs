//! Validation utilities for scheme analysis

use super::{Error, Result};

const SCHEME: &str = "Kyber";

/// Validate that a parameter is strictly positive
pub fn positive(value: u64, name: &'static str) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidParameter {
            scheme: SCHEME,
            name,
            reason: "must be strictly positive",
        });
    }
    Ok(())
}

/// Validate that a product of dimensions fits in `usize`
pub fn dimension(n: usize, m: usize) -> Result<usize> {
    n.checked_mul(m).ok_or(Error::InvalidParameter {
        scheme: SCHEME,
        name: "n * m",
        reason: "module dimension overflows usize",
    })
}

/// Validate that the analysis supports a configuration
pub fn supported(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::UnsupportedConfiguration {
            scheme: SCHEME,
            reason,
        });
    }
    Ok(())
}
