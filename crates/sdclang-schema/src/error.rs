//! Decode errors for the configuration documents.

use std::fmt;

/// Which configuration document failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    /// The AE config file.
    AeConfig,
    /// The vendor override file.
    VendorConfig,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AeConfig => write!(f, "AE config"),
            Self::VendorConfig => write!(f, "vendor config"),
        }
    }
}

/// Schema decode failure.
///
/// Invalid JSON and a known key holding the wrong type are the same
/// failure: the document was authored incorrectly and must be fixed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("malformed {document}: {message}")]
    Malformed {
        document: Document,
        /// Decoder message, including line and column.
        message: String,
    },
}

impl SchemaError {
    pub(crate) fn malformed(document: Document, err: serde_json::Error) -> Self {
        Self::Malformed {
            document,
            message: err.to_string(),
        }
    }

    /// The document that failed to decode.
    pub fn document(&self) -> Document {
        match self {
            Self::Malformed { document, .. } => *document,
        }
    }
}
