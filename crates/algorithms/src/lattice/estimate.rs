//! Security estimate of an MLWE instance

use core::fmt;

use kyberscope_api::{AttackEstimator, MlweInstance, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attacks::{optimize_attack, Attack};

/// Optimal parameters and costs (log2) of one attack
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttackCost {
    /// Attack these costs belong to
    pub attack: Attack,
    /// Number of LWE samples used
    pub m: usize,
    /// BKZ block size
    pub b: usize,
    /// Cost with the classical sieve
    pub classical: f64,
    /// Cost with the quantum sieve
    pub quantum: f64,
    /// Cost with the plausible lower bound
    pub plausible: f64,
}

/// Primal and dual estimates of one MLWE instance.
///
/// An attack is `None` when the instance is outside the range of the cost
/// model; this never means the instance is secure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SecurityEstimate {
    /// Instance that was analysed
    pub instance: MlweInstance,
    /// Best primal attack
    pub primal: Option<AttackCost>,
    /// Best dual attack
    pub dual: Option<AttackCost>,
}

impl SecurityEstimate {
    /// Cheapest attack under the classical model
    pub fn best(&self) -> Option<&AttackCost> {
        [self.primal.as_ref(), self.dual.as_ref()]
            .into_iter()
            .flatten()
            .min_by(|a, b| a.classical.total_cmp(&b.classical))
    }

    /// Classical bit security
    pub fn classical_bits(&self) -> Option<f64> {
        self.min_over(|c| c.classical)
    }

    /// Quantum bit security
    pub fn quantum_bits(&self) -> Option<f64> {
        self.min_over(|c| c.quantum)
    }

    /// Plausible lower bound on the bit security
    pub fn plausible_bits(&self) -> Option<f64> {
        self.min_over(|c| c.plausible)
    }

    fn min_over(&self, f: impl Fn(&AttackCost) -> f64) -> Option<f64> {
        [self.primal.as_ref(), self.dual.as_ref()]
            .into_iter()
            .flatten()
            .map(f)
            .reduce(f64::min)
    }
}

impl fmt::Display for SecurityEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.instance)?;
        writeln!(
            f,
            "{:<8} {:>6} {:>6} {:>10} {:>10} {:>10}",
            "attack", "m", "b", "classical", "quantum", "plausible"
        )?;
        for (attack, cost) in [(Attack::Primal, &self.primal), (Attack::Dual, &self.dual)] {
            match cost {
                Some(c) => writeln!(
                    f,
                    "{:<8} {:>6} {:>6} {:>10.0} {:>10.0} {:>10.0}",
                    attack.name(),
                    c.m,
                    c.b,
                    c.classical.floor(),
                    c.quantum.floor(),
                    c.plausible.floor()
                )?,
                None => writeln!(f, "{:<8} out of cost model range", attack.name())?,
            }
        }
        Ok(())
    }
}

/// Core-SVP estimator over the primal and dual attacks
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreSvpEstimator;

impl AttackEstimator for CoreSvpEstimator {
    type Estimate = SecurityEstimate;

    fn name(&self) -> &'static str {
        "core-SVP"
    }

    fn estimate(&self, instance: &MlweInstance) -> Result<SecurityEstimate> {
        kyberscope_api::error::validation::positive(instance.q as u64, "MLWE modulus")?;

        let q = instance.q as f64;
        let n = instance.lwe_dimension();
        let max_m = instance.max_samples();
        let s = instance.noise_std_dev();

        tracing::debug!(%instance, n, max_m, s, "estimating attack costs");

        Ok(SecurityEstimate {
            instance: *instance,
            primal: optimize_attack(Attack::Primal, q, n, max_m, s),
            dual: optimize_attack(Attack::Dual, q, n, max_m, s),
        })
    }
}
