//! Provenance of consulted configuration files.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Which configuration file a source is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfigOrigin {
    AeConfig,
    VendorConfig,
}

/// A configuration file that was found and read
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigSource {
    /// Which file this is
    pub origin: ConfigOrigin,

    /// Path the file was read from
    pub path: String,

    /// SHA-256 digest of the raw file bytes
    pub digest: String,
}

impl ConfigSource {
    /// Record a file read from `path` with contents `bytes`.
    pub fn new(origin: ConfigOrigin, path: &Path, bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);

        Self {
            origin,
            path: path.to_string_lossy().to_string(),
            digest: hex::encode(hasher.finalize()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_sha256_hex() {
        let source = ConfigSource::new(ConfigOrigin::AeConfig, Path::new("ae.json"), b"{}");
        assert_eq!(source.digest.len(), 64);
        assert_eq!(
            source.digest,
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
        assert_eq!(source.path, "ae.json");
    }

    #[test]
    fn test_origin_serialization() {
        let json = serde_json::to_string(&ConfigOrigin::VendorConfig).unwrap();
        assert_eq!(json, "\"vendor_config\"");
    }
}
