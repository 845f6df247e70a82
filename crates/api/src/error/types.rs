//! Error type definitions for parameter estimation

use thiserror::Error;

/// Primary error type for estimation operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The analysis does not know how to handle this combination of parameters
    #[error("Unsupported configuration: {context}: {message}")]
    UnsupportedConfiguration {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// A cost model or probability computation could not produce a value
    #[error("Estimation error: {context}: {message}")]
    Estimation {
        context: &'static str,
        message: String,
    },

    /// Configuration file error
    #[error("Configuration error: {context}: {message}")]
    Config {
        context: &'static str,
        message: String,
    },

    /// I/O error
    #[error("I/O error: {context}: {message}")]
    Io {
        context: &'static str,
        message: String,
    },
}

/// Result type for estimation operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::UnsupportedConfiguration { message, .. } => {
                Self::UnsupportedConfiguration { context, message }
            }
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Estimation { message, .. } => Self::Estimation { context, message },
            Self::Config { message, .. } => Self::Config { context, message },
            Self::Io { message, .. } => Self::Io { context, message },
        }
    }

    /// True when the error rejects the parameter combination itself
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedConfiguration { .. })
    }

    /// True for configuration file errors
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}
