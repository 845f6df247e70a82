//! Numeric building blocks of the kyberscope estimator
//!
//! This crate provides the two families of computations the scheme analysis
//! is built on:
//!
//! - [`proba`]: exact finite probability laws over the integers (centered
//!   binomial noise, modulus-switching error, sums and products of
//!   independent variables, tail bounds).
//! - [`lattice`]: core-SVP cost models of the primal and dual lattice
//!   attacks against Module-LWE.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Probability laws
pub mod proba;
pub use proba::Law;

// Lattice attack cost models
pub mod lattice;
pub use lattice::{Attack, AttackCost, CoreSvpEstimator, SecurityEstimate, SvpModel};
