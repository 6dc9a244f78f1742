//! AE config document.

use serde::{Deserialize, Serialize};

use crate::error::{Document, SchemaError};

/// Decoded AE config file.
///
/// Unknown keys are ignored. A missing `SDCLANG_AE_FLAG` means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AeConfig {
    /// The auto-enable flag value.
    #[serde(
        rename = "SDCLANG_AE_FLAG",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ae_flag: Option<String>,
}

impl AeConfig {
    /// Decode from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::malformed(Document::AeConfig, e))
    }

    /// Decode from raw file bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        serde_json::from_slice(bytes).map_err(|e| SchemaError::malformed(Document::AeConfig, e))
    }

    /// The flag value, empty when not set.
    pub fn flag(&self) -> &str {
        self.ae_flag.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_flag() {
        let config = AeConfig::from_json(r#"{"SDCLANG_AE_FLAG": "-fsafe"}"#).unwrap();
        assert_eq!(config.flag(), "-fsafe");
    }

    #[test]
    fn test_missing_key_is_unset() {
        let config = AeConfig::from_json(r#"{"OTHER": 1}"#).unwrap();
        assert!(config.ae_flag.is_none());
        assert_eq!(config.flag(), "");
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let err = AeConfig::from_json(r#"{"SDCLANG_AE_FLAG": 7}"#).unwrap_err();
        assert_eq!(err.document(), Document::AeConfig);
        assert!(err.to_string().starts_with("malformed AE config"));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = AeConfig::from_json(r#"{"SDCLANG_AE_FLAG": "#).unwrap_err();
        assert!(matches!(err, SchemaError::Malformed { .. }));
    }
}
