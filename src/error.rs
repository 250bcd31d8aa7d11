//! Error types for lbforge
//!
//! Uses `thiserror` for library errors. Errors raised by a wrapped legacy
//! driver are not represented here: the shim returns them untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lbforge operations
pub type LbResult<T> = Result<T, LbError>;

/// Main error type for lbforge operations
#[derive(Error, Debug)]
pub enum LbError {
    /// Value outside a closed mapping table (protocol, algorithm, ...)
    #[error("unsupported {field} '{value}'")]
    Mapping { field: &'static str, value: String },

    /// Required relationship or field missing at render time
    #[error("{entity} '{id}' has no {missing}")]
    IncompleteTopology {
        entity: &'static str,
        id: String,
        missing: &'static str,
    },

    /// Atomic write or rename of the output file failed
    #[error("failed to persist {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template compilation or rendering failed
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Renderer settings could not be parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LbError {
    pub(crate) fn mapping(field: &'static str, value: impl Into<String>) -> Self {
        LbError::Mapping {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn incomplete(
        entity: &'static str,
        id: impl Into<String>,
        missing: &'static str,
    ) -> Self {
        LbError::IncompleteTopology {
            entity,
            id: id.into(),
            missing,
        }
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LbError::Persistence {
            path: path.into(),
            source,
        }
    }
}
