//! Resolution report with full provenance
//!
//! Captures the resolved SDClang state, which layer supplied each value,
//! and the digests of the config files that were consulted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::config::ConfigSource;
use crate::init::SdclangConfig;
use crate::publish::PublishedVariables;
use crate::resolve::{FeatureProvenance, ResolvedFeatureState, ValueOrigin};

/// Schema version for the report
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "sdclang-config/resolution@1";

/// Serializable snapshot of an [`SdclangConfig`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When this report was produced
    pub created_at: DateTime<Utc>,

    /// Product the state was resolved for
    pub product: String,

    pub state: ResolvedFeatureState,

    pub provenance: FeatureProvenance,

    /// Config files that were found
    pub sources: Vec<ConfigSource>,

    pub variables: PublishedVariables,
}

impl ResolutionReport {
    pub fn new(config: &SdclangConfig) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            product: config.product().to_string(),
            state: config.state().clone(),
            provenance: *config.provenance(),
            sources: config.sources().to_vec(),
            variables: config.variables().clone(),
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Write to file
    pub fn write_to_file(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)
    }

    /// Human-readable summary
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let product = if self.product.is_empty() {
            "(unset)"
        } else {
            &self.product
        };
        out.push_str(&format!("Product: {}\n", product));
        out.push_str(&format!(
            "  SDCLANG        = {:<6} [{}]\n",
            self.state.enabled,
            origin_label(self.provenance.enabled)
        ));
        out.push_str(&format!(
            "  SDCLANG_PATH   = {:?} [{}]\n",
            self.state.path,
            origin_label(self.provenance.path)
        ));
        out.push_str(&format!(
            "  SDCLANG_FLAGS  = {:?} [{}]\n",
            self.state.flags,
            origin_label(self.provenance.flags)
        ));

        if self.sources.is_empty() {
            out.push_str("Sources: none\n");
        } else {
            out.push_str("Sources:\n");
            for source in &self.sources {
                out.push_str(&format!(
                    "  {:?}: {} (sha256 {})\n",
                    source.origin,
                    source.path,
                    &source.digest[..source.digest.len().min(12)]
                ));
            }
        }
        out
    }
}

fn origin_label(origin: ValueOrigin) -> &'static str {
    match origin {
        ValueOrigin::Default => "default",
        ValueOrigin::File => "file",
        ValueOrigin::Environment => "env",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EnvSnapshot, SDCLANG, SDCLANG_PATH, TARGET_PRODUCT};
    use tempfile::TempDir;

    fn env_config() -> SdclangConfig {
        let env = EnvSnapshot::from_pairs([
            (TARGET_PRODUCT, "msmnile"),
            (SDCLANG, "1"),
            (SDCLANG_PATH, "/opt/tc"),
        ]);
        SdclangConfig::init(&env).unwrap()
    }

    #[test]
    fn test_report_fields() {
        let report = ResolutionReport::new(&env_config());
        assert_eq!(report.schema_version, SCHEMA_VERSION);
        assert_eq!(report.schema_id, SCHEMA_ID);
        assert_eq!(report.product, "msmnile");
        assert!(report.state.enabled);
        assert_eq!(report.provenance.path, ValueOrigin::Environment);
    }

    #[test]
    fn test_json_roundtrip_keeps_state() {
        let report = ResolutionReport::new(&env_config());
        let parsed = ResolutionReport::from_json(&report.to_json().unwrap()).unwrap();
        assert_eq!(parsed.state, report.state);
        assert_eq!(parsed.variables, report.variables);
    }

    #[test]
    fn test_to_human() {
        let human = ResolutionReport::new(&env_config()).to_human();
        assert!(human.starts_with("Product: msmnile\n"));
        assert!(human.contains("\"/opt/tc\" [env]"));
        assert!(human.contains("Sources: none"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resolution.json");
        ResolutionReport::new(&env_config())
            .write_to_file(&path)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["schema_id"], SCHEMA_ID);
        assert_eq!(value["provenance"]["enabled"], "environment");
    }
}
