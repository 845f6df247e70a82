// kem/src/kyber/params.rs

//! Kyber parameter set definition.

use core::fmt;

use params::kyber::KyberSpec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{validate, Result};

/// Algebraic and noise parameters of one Kyber instantiation.
///
/// Immutable once built. The ciphertext noise width is always present: when
/// the caller does not give one it is the error noise width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ParameterSet {
    n: usize,
    m: usize,
    secret_noise_width: u32,
    error_noise_width: u32,
    ciphertext_noise_width: u32,
    q: u32,
    rqk: u32,
    rqc: u32,
    rq2: u32,
}

impl ParameterSet {
    /// Build a parameter set.
    ///
    /// `n`, `m`, `q`, `rqk`, `rqc` and `rq2` must be strictly positive and
    /// `n * m` must fit in `usize`.
    /// Equality of the secret and error noise widths is not checked here;
    /// only the MLWE reduction requires it.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n: usize,
        m: usize,
        secret_noise_width: u32,
        error_noise_width: u32,
        q: u32,
        rqk: u32,
        rqc: u32,
        rq2: u32,
        ciphertext_noise_width: Option<u32>,
    ) -> Result<Self> {
        validate::positive(n as u64, "n")?;
        validate::positive(m as u64, "m")?;
        validate::positive(q as u64, "q")?;
        validate::positive(rqk as u64, "rqk")?;
        validate::positive(rqc as u64, "rqc")?;
        validate::positive(rq2 as u64, "rq2")?;
        validate::dimension(n, m)?;

        Ok(Self {
            n,
            m,
            secret_noise_width,
            error_noise_width,
            ciphertext_noise_width: ciphertext_noise_width.unwrap_or(error_noise_width),
            q,
            rqk,
            rqc,
            rq2,
        })
    }

    /// Build the parameter set described by a named spec
    pub fn from_spec(spec: &KyberSpec) -> Result<Self> {
        Self::new(
            spec.n,
            spec.m,
            spec.secret_noise_width,
            spec.error_noise_width,
            spec.q,
            spec.rqk,
            spec.rqc,
            spec.rq2,
            spec.ciphertext_noise_width,
        )
    }

    /// Ring dimension
    pub fn n(&self) -> usize {
        self.n
    }

    /// Module rank
    pub fn m(&self) -> usize {
        self.m
    }

    /// Centered binomial parameter of the secret key
    pub fn secret_noise_width(&self) -> u32 {
        self.secret_noise_width
    }

    /// Centered binomial parameter of the key-generation error
    pub fn error_noise_width(&self) -> u32 {
        self.error_noise_width
    }

    /// Centered binomial parameter of the ciphertext errors e1 and e2
    pub fn ciphertext_noise_width(&self) -> u32 {
        self.ciphertext_noise_width
    }

    /// Modulus
    pub fn q(&self) -> u32 {
        self.q
    }

    /// Alphabet size of a compressed public key coefficient
    pub fn rqk(&self) -> u32 {
        self.rqk
    }

    /// Alphabet size of a compressed first ciphertext coefficient
    pub fn rqc(&self) -> u32 {
        self.rqc
    }

    /// Alphabet size of a compressed second ciphertext coefficient
    pub fn rq2(&self) -> u32 {
        self.rq2
    }
}

impl TryFrom<&KyberSpec> for ParameterSet {
    type Error = crate::error::Error;

    fn try_from(spec: &KyberSpec) -> Result<Self> {
        Self::from_spec(spec)
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}, m={}, secret_noise_width={}, error_noise_width={}, \
             ciphertext_noise_width={}, q={}, rqk={}, rqc={}, rq2={}",
            self.n,
            self.m,
            self.secret_noise_width,
            self.error_noise_width,
            self.ciphertext_noise_width,
            self.q,
            self.rqk,
            self.rqc,
            self.rq2
        )
    }
}
