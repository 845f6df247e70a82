//! Full report of a named parameter set

use core::fmt;

use kyberscope_algorithms::{CoreSvpEstimator, SecurityEstimate};
use kyberscope_kem::{assess_security, summarize, CyclotomicFailure, ParameterSet};
use kyberscope_kem::{SecurityAssessment, Summary};
use kyberscope_params::kyber::KyberSpec;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A parameter set with the name it is selected by and its report heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSet {
    /// Selection name
    pub name: String,
    /// Heading printed above the report
    pub title: String,
    /// The parameters
    pub params: ParameterSet,
}

impl NamedSet {
    /// Build from a built-in spec
    pub fn from_spec(spec: &KyberSpec) -> kyberscope_kem::error::Result<Self> {
        Ok(Self {
            name: spec.name.to_string(),
            title: spec.title.to_string(),
            params: ParameterSet::from_spec(spec)?,
        })
    }
}

/// Security assessment and summary of one set
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Report {
    /// Selection name
    pub name: String,
    /// Heading
    pub title: String,
    /// Absent when the security step was skipped
    pub security: Option<SecurityAssessment<SecurityEstimate>>,
    /// Costs and failure probability
    pub summary: Summary,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "--------------------")?;
        if let Some(security) = &self.security {
            writeln!(f, "{}", security)?;
        }
        writeln!(f, "{}", self.summary)
    }
}

/// Analyse one set: the security step (unless skipped), then the summary.
pub fn analyze(set: &NamedSet, with_security: bool) -> kyberscope_api::Result<Report> {
    let _span = tracing::info_span!("analyze", set = %set.name).entered();

    let security = if with_security {
        Some(assess_security(&set.params, &CoreSvpEstimator)?)
    } else {
        None
    };
    let summary = summarize(&set.params, &CyclotomicFailure)?;
    tracing::info!(log2_failure = summary.failure.log2, "analysis complete");

    Ok(Report {
        name: set.name.clone(),
        title: set.title.clone(),
        security,
        summary,
    })
}
