// kem/src/kyber/reduction.rs

//! Reduction of a Kyber parameter set to its underlying MLWE problem.

use core::fmt;

use algorithms::proba::mod_switching_error;
use api::MlweInstance;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::params::ParameterSet;
use crate::error::{validate, Result};

/// The ciphertext MLWE instance may be easier than the public key one.
///
/// Both variances are the heuristic proxies compared by the reduction:
/// half the ciphertext noise width plus the variance of the ciphertext
/// rounding, against half the secret noise width.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SecurityAdvisory {
    /// `ciphertext_noise_width / 2 + var_rounding`
    pub ciphertext_variance: f64,
    /// `secret_noise_width / 2`
    pub public_key_variance: f64,
}

impl fmt::Display for SecurityAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The security of the ciphertext MLWE may not be stronger than the one of \
             the public key MLWE ({:.2} < {:.2})",
            self.ciphertext_variance, self.public_key_variance
        )
    }
}

/// Output of [`kyber_to_mlwe`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Reduction {
    /// Instance whose hardness bounds key recovery
    pub instance: MlweInstance,
    /// Present when the ciphertext instance looks weaker than the public key one
    pub advisory: Option<SecurityAdvisory>,
}

/// Map `ps` to the MLWE instance `(n, m, m + 1, secret_noise_width, q)`.
///
/// Fails with `UnsupportedConfiguration` when the secret and error noise
/// widths differ. The module rank of the samples is `m + 1` for the extra
/// equation given by the public key.
pub fn kyber_to_mlwe(ps: &ParameterSet) -> Result<Reduction> {
    validate::supported(
        ps.secret_noise_width() == ps.error_noise_width(),
        "the security analysis does not handle different secret and error noise widths",
    )?;

    let rounding = mod_switching_error(ps.q(), ps.rqc())?;
    let var_rounding = rounding.second_moment();

    let ciphertext_variance = ps.ciphertext_noise_width() as f64 / 2.0 + var_rounding;
    let public_key_variance = ps.secret_noise_width() as f64 / 2.0;
    tracing::debug!(var_rounding, ciphertext_variance, public_key_variance, "rounding variance");

    let advisory = (ciphertext_variance < public_key_variance).then_some(SecurityAdvisory {
        ciphertext_variance,
        public_key_variance,
    });

    Ok(Reduction {
        instance: MlweInstance::new(
            ps.n(),
            ps.m(),
            ps.m() + 1,
            ps.secret_noise_width(),
            ps.q(),
        ),
        advisory,
    })
}
