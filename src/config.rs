//! Parameter files
//!
//! Custom parameter sets can be described in TOML, one table per set:
//!
//! ```toml
//! [[parameter_set]]
//! name = "kyber512-du9"
//! title = "Kyber512 with 9-bit u"
//! n = 256
//! m = 2
//! secret_noise_width = 3
//! error_noise_width = 3
//! ciphertext_noise_width = 2   # optional, defaults to error_noise_width
//! q = 3329
//! rqk = 4096
//! rqc = 512
//! rq2 = 16
//! ```

use std::fs;
use std::path::Path;

use kyberscope_api::{Error, Result, ResultExt};
use kyberscope_kem::ParameterSet;
use serde::Deserialize;

use crate::report::NamedSet;

/// One `[[parameter_set]]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSetConfig {
    /// Selection name
    pub name: String,
    /// Heading, the name when absent
    pub title: Option<String>,
    /// Ring dimension
    pub n: usize,
    /// Module rank
    pub m: usize,
    /// Secret noise width
    pub secret_noise_width: u32,
    /// Error noise width
    pub error_noise_width: u32,
    /// Ciphertext noise width
    pub ciphertext_noise_width: Option<u32>,
    /// Modulus
    pub q: u32,
    /// Public key alphabet size
    pub rqk: u32,
    /// First ciphertext alphabet size
    pub rqc: u32,
    /// Second ciphertext alphabet size
    pub rq2: u32,
}

impl ParameterSetConfig {
    /// Validate the table into a named parameter set
    pub fn to_named_set(&self) -> kyberscope_kem::error::Result<NamedSet> {
        let params = ParameterSet::new(
            self.n,
            self.m,
            self.secret_noise_width,
            self.error_noise_width,
            self.q,
            self.rqk,
            self.rqc,
            self.rq2,
            self.ciphertext_noise_width,
        )?;
        Ok(NamedSet {
            name: self.name.clone(),
            title: self.title.clone().unwrap_or_else(|| self.name.clone()),
            params,
        })
    }
}

/// Contents of a parameter file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Parameter sets in file order
    #[serde(default, rename = "parameter_set")]
    pub parameter_sets: Vec<ParameterSetConfig>,
}

impl ConfigFile {
    /// Parse TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config {
            context: "parsing parameter file",
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context("reading parameter file")?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), sets = config.parameter_sets.len(), "loaded parameter file");
        Ok(config)
    }
}
