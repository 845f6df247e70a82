// File: crates/api/src/traits/estimator.rs

//! Traits for the cost models that turn parameters into numbers
//!
//! The scheme analysis only fixes the call contract of these collaborators;
//! concrete models live in `kyberscope-algorithms` and `kyberscope-kem`.

use core::fmt;

use crate::types::MlweInstance;
use crate::Result;

/// Estimates the cost of known lattice attacks against an MLWE instance.
///
/// Implementations may be expensive but must be deterministic.
pub trait AttackEstimator {
    /// Result of the estimation, printable for reports.
    type Estimate: fmt::Display;

    /// Returns the cost model name.
    fn name(&self) -> &'static str;

    /// Estimate the security of `instance`.
    fn estimate(&self, instance: &MlweInstance) -> Result<Self::Estimate>;
}

/// Computes the decryption-failure probability of a parameter set `P`.
pub trait FailureEstimator<P: ?Sized> {
    /// Structured representation of the final error, e.g. its distribution.
    type ErrorLaw;

    /// Returns the final error representation and the failure probability.
    ///
    /// The probability lies in `[0, 1]` and must stay meaningful down to
    /// roughly `2^-300`.
    fn error_probability(&self, params: &P) -> Result<(Self::ErrorLaw, f64)>;
}
