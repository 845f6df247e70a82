//! Core types shared between the scheme analysis and the attack cost models

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A Module-LWE hardness instance.
///
/// The secret is a vector of `secret_rank` ring elements over
/// `Z_q[X]/(X^ring_dimension + 1)` and the attacker sees `sample_rank` ring
/// samples. Secret and error coefficients follow a centered binomial law of
/// parameter `noise_width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MlweInstance {
    /// Degree of the cyclotomic ring
    pub ring_dimension: usize,
    /// Number of ring elements in the secret
    pub secret_rank: usize,
    /// Number of ring elements in the available samples
    pub sample_rank: usize,
    /// Centered binomial parameter of secret and error
    pub noise_width: u32,
    /// Modulus
    pub q: u32,
}

impl MlweInstance {
    /// Create a new instance description
    pub fn new(
        ring_dimension: usize,
        secret_rank: usize,
        sample_rank: usize,
        noise_width: u32,
        q: u32,
    ) -> Self {
        Self {
            ring_dimension,
            secret_rank,
            sample_rank,
            noise_width,
            q,
        }
    }

    /// Dimension of the secret once unrolled into a plain LWE instance
    pub fn lwe_dimension(&self) -> usize {
        self.ring_dimension * self.secret_rank
    }

    /// Number of LWE samples once the ring samples are unrolled
    pub fn max_samples(&self) -> usize {
        self.ring_dimension * self.sample_rank
    }

    /// Standard deviation of the centered binomial noise, `sqrt(eta / 2)`
    pub fn noise_std_dev(&self) -> f64 {
        (self.noise_width as f64 / 2.0).sqrt()
    }
}

impl fmt::Display for MlweInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MLWE(n={}, d={}, m={}, eta={}, q={})",
            self.ring_dimension, self.secret_rank, self.sample_rank, self.noise_width, self.q
        )
    }
}
