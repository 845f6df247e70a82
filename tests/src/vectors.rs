// src/vectors.rs

//! Reference values for the built-in parameter sets

use serde::Deserialize;

const REFERENCE: &str = include_str!("../vectors/reference.toml");

/// Expected decryption-failure probability of a named set
#[derive(Debug, Clone, Deserialize)]
pub struct FailureVector {
    pub name: String,
    pub probability: f64,
    /// Relative tolerance
    pub tolerance: f64,
}

/// Expected core-SVP optimum of a named set
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityVector {
    pub name: String,
    pub primal_b: usize,
    pub dual_b: usize,
    pub primal_classical: f64,
    pub dual_classical: f64,
    /// Absolute tolerance on block sizes
    pub b_tolerance: usize,
    /// Absolute tolerance on bit costs
    pub bits_tolerance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceVectors {
    #[serde(default)]
    pub failure: Vec<FailureVector>,
    #[serde(default)]
    pub security: Vec<SecurityVector>,
}

/// Parse the bundled reference file
pub fn load() -> Result<ReferenceVectors, toml::de::Error> {
    toml::from_str(REFERENCE)
}

impl FailureVector {
    pub fn matches(&self, probability: f64) -> bool {
        (probability - self.probability).abs() <= self.tolerance * self.probability
    }
}
