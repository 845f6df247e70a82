// kem/src/kyber/failure.rs

//! Decryption-failure probability over the cyclotomic ring.
//!
//! Decryption computes `v - s^T u`, whose error term is
//! `e^T r - s^T (e1 + Rc) + e2 + R2` once compression errors are included:
//! `Rk` on the public key folds into `e`, `Rc` into `e1`, `R2` into `e2`.
//! Each coefficient of the two inner products is a sum of `n * m`
//! independent products, so its law is an iterated convolution. A
//! coefficient decrypts wrongly when its error reaches `q / 4`; the failure
//! probability is union-bounded over the `n` coefficients.

use core::fmt;

use algorithms::proba::{
    self, centered_binomial, convolution, iter_convolution, mod_switching_error, product, Law,
};
use algorithms::validate;
use api::FailureEstimator;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::params::ParameterSet;
use crate::error::Result;

/// Floor added to a probability before taking its logarithm (`2^-300`)
pub const LOG2_FLOOR: f64 = proba::CLEAN_THRESHOLD;

/// Law of the error on one coefficient of the decrypted message
pub fn final_error_distribution(ps: &ParameterSet) -> Result<Law> {
    let chi_s = centered_binomial(ps.secret_noise_width())?;
    let chi_e = centered_binomial(ps.error_noise_width())?;
    let chi_ct = centered_binomial(ps.ciphertext_noise_width())?;

    let rk = mod_switching_error(ps.q(), ps.rqk())?;
    let rc = mod_switching_error(ps.q(), ps.rqc())?;
    let r2 = mod_switching_error(ps.q(), ps.rq2())?;

    // e^T r with the public key rounding folded into e
    let b1 = product(&chi_s, &convolution(&chi_e, &rk));
    // s^T e1 with the first ciphertext rounding folded into e1
    let b2 = product(&chi_s, &convolution(&chi_ct, &rc));

    let terms = ps.n() * ps.m();
    let c = convolution(&iter_convolution(&b1, terms), &iter_convolution(&b2, terms));
    let f = convolution(&r2, &chi_ct);

    let law = convolution(&c, &f);
    tracing::debug!(support = law.len(), max_abs = law.max_abs(), "final error law");
    Ok(law)
}

/// Final error law and decryption-failure probability of `ps`.
///
/// The probability is `n` times the single-coefficient tail beyond `q / 4`,
/// capped at 1.
pub fn error_probability(ps: &ParameterSet) -> Result<(Law, f64)> {
    let law = final_error_distribution(ps)?;
    let tail = proba::tail_probability(&law, ps.q() as f64 / 4.0);
    // f64::min would turn a NaN tail into 1
    validate::processing(tail.is_finite(), "error_probability", "tail probability is not finite")?;
    let probability = (ps.n() as f64 * tail).min(1.0);
    Ok((law, probability))
}

/// Failure estimator integrating the exact coefficient error law
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclotomicFailure;

impl FailureEstimator<ParameterSet> for CyclotomicFailure {
    type ErrorLaw = Law;

    fn error_probability(&self, params: &ParameterSet) -> api::Result<(Law, f64)> {
        Ok(error_probability(params)?)
    }
}

/// A failure probability with its base-2 exponent
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FailureProbability {
    /// Probability in `[0, 1]`
    pub probability: f64,
    /// `log2(probability + 2^-300)`, finite even for a zero probability
    pub log2: f64,
}

impl FailureProbability {
    /// Wrap a probability and compute its exponent
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            log2: (probability + LOG2_FLOOR).log2(),
        }
    }
}

impl fmt::Display for FailureProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} = 2^{:.1}", self.probability, self.log2)
    }
}
