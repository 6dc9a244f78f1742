//! Resolution errors
//!
//! Every variant is fatal: the caller must not publish any configuration
//! once one of these is returned.

use sdclang_schema::SchemaError;
use std::path::PathBuf;

/// Unrecoverable resolution failure.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The file exists but could not be read.
    #[error("cannot read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// The file was read but is not a valid configuration document.
    #[error("{}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    /// The feature is enabled but no layer supplied a toolchain path.
    #[error("SDCLANG_PATH can not be empty if SDCLANG is true")]
    MissingToolchainPath,
}

impl ResolveError {
    /// Name of the error kind, stable for scripts.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Malformed { .. } => "malformed_configuration",
            Self::MissingToolchainPath => "invariant_violation",
        }
    }
}
