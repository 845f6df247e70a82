//! Analysis of Kyber-family key encapsulation parameter sets
//!
//! This crate maps the parameters of a Kyber-like KEM onto a Module-LWE
//! hardness instance and computes the derived metrics a designer needs to
//! choose a parameter set: wire size of each protocol message and
//! decryption-failure probability.

pub mod error;
pub mod kyber;

// Re-exports
pub use kyber::{
    assess_security, communication_costs, kyber_to_mlwe, summarize, CommunicationCost,
    CyclotomicFailure, FailureProbability, ParameterSet, Reduction, SecurityAdvisory,
    SecurityAssessment, Summary,
};
