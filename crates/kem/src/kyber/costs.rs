// kem/src/kyber/costs.rs

//! Communication cost of one key exchange.

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::params::ParameterSet;

/// Size of the seed sent along with the public key, in bits
pub const SEED_BITS: u32 = 256;

/// Bytes sent by each party
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CommunicationCost {
    /// Key generator: seed and compressed public key
    pub key_generator: f64,
    /// Encapsulator: both compressed ciphertext components
    pub encapsulator: f64,
}

impl CommunicationCost {
    /// Bytes exchanged in total
    pub fn total(&self) -> f64 {
        self.key_generator + self.encapsulator
    }
}

impl fmt::Display for CommunicationCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.key_generator, self.encapsulator)
    }
}

/// Compute the bytes sent by the key generator and by the encapsulator.
///
/// Bit counts are rounded to the nearest integer before dividing by 8.
pub fn communication_costs(ps: &ParameterSet) -> CommunicationCost {
    let n = ps.n() as f64;
    let nm = (ps.n() * ps.m()) as f64;

    let a_bits = SEED_BITS as f64 + nm * (ps.rqk() as f64).log2();
    let b_bits = nm * (ps.rqc() as f64).log2() + n * (ps.rq2() as f64).log2();

    CommunicationCost {
        key_generator: a_bits.round() / 8.0,
        encapsulator: b_bits.round() / 8.0,
    }
}
