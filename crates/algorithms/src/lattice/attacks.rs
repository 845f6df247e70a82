//! Primal and dual attacks on plain LWE

use core::f64::consts::{LN_2, PI};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bkz::{delta_bkz, nvec_sieve, SvpModel, BKZ_MIN_BLOCK};
use super::estimate::AttackCost;

/// A lattice attack on LWE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Attack {
    /// Unique-SVP embedding of the secret and error
    Primal,
    /// Short vector of the dual lattice used as a distinguisher
    Dual,
}

impl Attack {
    /// Attack name used in reports
    pub fn name(self) -> &'static str {
        match self {
            Attack::Primal => "Primal",
            Attack::Dual => "Dual",
        }
    }

    /// log2 of the cost of the attack using `m` samples and BKZ block size
    /// `b` against LWE of dimension `n`, modulus `q` and error standard
    /// deviation `s`.
    ///
    /// Infinite when the primal attack does not succeed for `(m, b)`.
    pub fn cost(self, q: f64, n: usize, m: usize, s: f64, b: usize, svp: SvpModel) -> f64 {
        match self {
            Attack::Primal => primal_cost(q, n, m, s, b, svp),
            Attack::Dual => dual_cost(q, n, m, s, b, svp),
        }
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn primal_cost(q: f64, n: usize, m: usize, s: f64, b: usize, svp: SvpModel) -> f64 {
    let d = (n + m) as f64;
    let b = b as f64;
    let delta = delta_bkz(b);
    if s * b.sqrt() <= delta.powf(2.0 * b - d - 1.0) * q.powf(m as f64 / d) {
        svp.cost(b)
    } else {
        f64::INFINITY
    }
}

fn dual_cost(q: f64, n: usize, m: usize, s: f64, b: usize, svp: SvpModel) -> f64 {
    let d = (n + m) as f64;
    let b = b as f64;
    let delta = delta_bkz(b);
    let shortest = delta.powf(d) * q.powf(n as f64 / d);
    let tau = shortest * s / q;
    let log2_eps = -2.0 * PI * PI * tau * tau / LN_2;
    let log2_reps = (-2.0 * log2_eps - nvec_sieve(b)).max(0.0);
    svp.cost(b) + log2_reps
}

/// Search the block size and number of samples minimising the classical
/// cost of `attack`.
///
/// Block sizes range over `[BKZ_MIN_BLOCK, n + max_m]` and sample counts over
/// `[max(1, b - n), max_m]`. Returns `None` when no pair in range makes the
/// attack succeed, in particular when the lattice is smaller than
/// [`BKZ_MIN_BLOCK`].
pub fn optimize_attack(attack: Attack, q: f64, n: usize, max_m: usize, s: f64) -> Option<AttackCost> {
    let mut best: Option<(usize, usize, f64)> = None;

    for b in BKZ_MIN_BLOCK..=(n + max_m) {
        if let Some((_, _, cost)) = best {
            // No larger block can beat the current optimum
            if SvpModel::Classical.cost(b as f64) > cost {
                break;
            }
        }

        for m in b.saturating_sub(n).max(1)..=max_m {
            let cost = attack.cost(q, n, m, s, b, SvpModel::Classical);
            if cost.is_finite() && best.map_or(true, |(_, _, c)| cost < c) {
                best = Some((m, b, cost));
            }
        }
    }

    let (m, b, classical) = best?;
    tracing::debug!(attack = attack.name(), m, b, classical, "attack optimum");
    Some(AttackCost {
        attack,
        m,
        b,
        classical,
        quantum: attack.cost(q, n, m, s, b, SvpModel::Quantum),
        plausible: attack.cost(q, n, m, s, b, SvpModel::Plausible),
    })
}
