//! Public API traits and types for the kyberscope estimator
//!
//! This crate provides the public API surface shared by the estimator crates:
//! the error type, the Module-LWE instance description that links a scheme
//! to the attack cost models, and the estimator traits.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::MlweInstance;

// Re-export all traits from the traits module
pub use traits::{AttackEstimator, FailureEstimator};
