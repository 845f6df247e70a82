// kem/src/kyber/mod.rs

//! Kyber parameter-set analysis.
//!
//! The pipeline is flat: a [`ParameterSet`] is reduced to an MLWE instance
//! for the attack estimators ([`kyber_to_mlwe`], [`assess_security`]), and
//! independently summarised with its communication cost and failure
//! probability ([`summarize`]).

mod costs;
mod failure;
mod params;
mod reduction;
mod summary;

pub use self::costs::{communication_costs, CommunicationCost, SEED_BITS};
pub use self::failure::{
    error_probability, final_error_distribution, CyclotomicFailure, FailureProbability,
    LOG2_FLOOR,
};
pub use self::params::ParameterSet;
pub use self::reduction::{kyber_to_mlwe, Reduction, SecurityAdvisory};
pub use self::summary::{assess_security, summarize, SecurityAssessment, Summary};
