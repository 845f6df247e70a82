//! BKZ root-Hermite factor and SVP cost exponents

use core::f64::consts::{E, PI};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest block size the cost models are calibrated for
pub const BKZ_MIN_BLOCK: usize = 50;

/// Root-Hermite factor reached by BKZ with block size `b`
pub fn delta_bkz(b: f64) -> f64 {
    ((PI * b).powf(1.0 / b) * b / (2.0 * PI * E)).powf(1.0 / (2.0 * b - 2.0))
}

/// log2 of the number of vectors output by a sieve in dimension `b`
pub fn nvec_sieve(b: f64) -> f64 {
    (4.0f64 / 3.0).sqrt().log2() * b
}

/// Cost model of one SVP call in dimension `b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SvpModel {
    /// Best known classical sieve, `2^(0.292 b)`
    Classical,
    /// Best known quantum sieve, `2^(0.265 b)`
    Quantum,
    /// Lower bound on any sieve, `2^(0.2075 b)`
    Plausible,
}

impl SvpModel {
    /// All models, in report order
    pub const ALL: [SvpModel; 3] = [SvpModel::Classical, SvpModel::Quantum, SvpModel::Plausible];

    /// log2 of the cost of one SVP call in dimension `b`
    pub fn cost(self, b: f64) -> f64 {
        let base: f64 = match self {
            SvpModel::Classical => 3.0 / 2.0,
            SvpModel::Quantum => 13.0 / 9.0,
            SvpModel::Plausible => 4.0 / 3.0,
        };
        base.sqrt().log2() * b
    }

    /// Model name used in reports
    pub fn name(self) -> &'static str {
        match self {
            SvpModel::Classical => "classical",
            SvpModel::Quantum => "quantum",
            SvpModel::Plausible => "plausible",
        }
    }
}

impl fmt::Display for SvpModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
