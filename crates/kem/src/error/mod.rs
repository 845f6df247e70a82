//! Error handling for scheme analysis

use api::error::Error as CoreError;
use algorithms::error::Error as PrimitiveError;
use thiserror::Error;

/// Error type for scheme analysis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Primitive error
    #[error("Primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// The analysis cannot handle this combination of parameters
    #[error("Unsupported {scheme} configuration: {reason}")]
    UnsupportedConfiguration {
        scheme: &'static str,
        reason: &'static str,
    },

    /// Invalid parameter value
    #[error("Invalid {scheme} parameter {name}: {reason}")]
    InvalidParameter {
        scheme: &'static str,
        name: &'static str,
        reason: &'static str,
    },
}

/// Result type for scheme analysis
pub type Result<T> = core::result::Result<T, Error>;

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::UnsupportedConfiguration { scheme, reason } => {
                CoreError::UnsupportedConfiguration {
                    context: scheme,
                    message: reason.to_string(),
                }
            }
            Error::InvalidParameter {
                scheme,
                name,
                reason,
            } => CoreError::InvalidParameter {
                context: scheme,
                message: format!("{}: {}", name, reason),
            },
        }
    }
}

// Include validation submodule
pub mod validate;

// Re-export core error handling traits
pub use api::error::ResultExt;
