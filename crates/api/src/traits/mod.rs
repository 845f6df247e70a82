//! Trait definitions for the estimator collaborators

pub mod estimator;

pub use estimator::{AttackEstimator, FailureEstimator};
