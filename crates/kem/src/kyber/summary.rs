// kem/src/kyber/summary.rs

//! Reports for one parameter set.
//!
//! Security assessment and the correctness/cost summary are separate entry
//! points so either can be produced without paying for the other.

use core::fmt;

use api::{AttackEstimator, FailureEstimator};

#[cfg(feature = "serde")]
use serde::Serialize;

use super::costs::{communication_costs, CommunicationCost};
use super::failure::FailureProbability;
use super::params::ParameterSet;
use super::reduction::{kyber_to_mlwe, Reduction};

/// Parameters, communication cost and failure probability of a set
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Summary {
    /// Parameter set summarised
    pub params: ParameterSet,
    /// Bytes sent by each party
    pub costs: CommunicationCost,
    /// Decryption-failure probability
    pub failure: FailureProbability,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "params: {}", self.params)?;
        writeln!(f, "com costs: {}", self.costs)?;
        write!(f, "failure: {}", self.failure)
    }
}

/// Summarise `ps` using `failure` to compute its failure probability
pub fn summarize<F>(ps: &ParameterSet, failure: &F) -> api::Result<Summary>
where
    F: FailureEstimator<ParameterSet>,
{
    let costs = communication_costs(ps);
    let (_, probability) = failure.error_probability(ps)?;
    api::error::validation::finite(probability, "failure probability")?;

    Ok(Summary {
        params: *ps,
        costs,
        failure: FailureProbability::new(probability),
    })
}

/// MLWE reduction of a set together with its attack cost estimate
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SecurityAssessment<E> {
    /// Reduction to MLWE, with its advisory if any
    pub reduction: Reduction,
    /// Output of the attack estimator
    pub estimate: E,
}

impl<E: fmt::Display> fmt::Display for SecurityAssessment<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "security:")?;
        if let Some(advisory) = &self.reduction.advisory {
            writeln!(f, "warning: {}", advisory)?;
        }
        write!(f, "{}", self.estimate)
    }
}

/// Reduce `ps` to MLWE and run `estimator` on the resulting instance.
///
/// An advisory does not stop the assessment; it is logged and returned.
pub fn assess_security<A>(ps: &ParameterSet, estimator: &A) -> api::Result<SecurityAssessment<A::Estimate>>
where
    A: AttackEstimator,
{
    let reduction = kyber_to_mlwe(ps)?;
    if let Some(advisory) = &reduction.advisory {
        tracing::warn!(%advisory, "weak ciphertext instance");
    }

    tracing::debug!(estimator = estimator.name(), instance = %reduction.instance, "running attack estimator");
    let estimate = estimator.estimate(&reduction.instance)?;

    Ok(SecurityAssessment {
        reduction,
        estimate,
    })
}
