//! # kyberscope
//!
//! Security, bandwidth and correctness estimates for Kyber-family lattice
//! KEM parameter sets.
//!
//! ## Usage
//!
//! ```no_run
//! use kyberscope::prelude::*;
//!
//! let ps = ParameterSet::from_spec(&kyberscope::params::kyber::RECOMMENDED)?;
//! let security = assess_security(&ps, &CoreSvpEstimator)?;
//! let summary = summarize(&ps, &CyclotomicFailure)?;
//! println!("{}\n{}", security, summary);
//! # Ok::<(), kyberscope::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize` on parameter sets, reports and estimates
//! - `cli` (default): the `kyberscope` binary and TOML parameter files
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`kyberscope-api`]: Error type, MLWE instance, estimator traits
//! - [`kyberscope-params`]: Named parameter sets
//! - [`kyberscope-algorithms`]: Probability laws and lattice attack costs
//! - [`kyberscope-kem`]: Kyber reduction, costs, failure rate and summaries

// Core re-exports
pub use kyberscope_algorithms as algorithms;
pub use kyberscope_api as api;
pub use kyberscope_kem as kem;
pub use kyberscope_params as params;

#[cfg(feature = "cli")]
pub mod config;
pub mod report;

/// Common imports for kyberscope users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits and types
    pub use crate::api::{AttackEstimator, FailureEstimator, MlweInstance};

    // Re-export estimators
    pub use crate::algorithms::{CoreSvpEstimator, Law, SecurityEstimate};

    // Re-export scheme analysis
    pub use crate::kem::{
        assess_security, communication_costs, kyber_to_mlwe, summarize, CommunicationCost,
        CyclotomicFailure, FailureProbability, ParameterSet, Reduction, SecurityAdvisory,
        SecurityAssessment, Summary,
    };

    pub use crate::report::{analyze, NamedSet, Report};
}
