//! Vendor override document.
//!
//! The file is an open mapping from product name to an override block:
//!
//! ```json
//! { "msmnile": { "SDCLANG": true, "SDCLANG_PATH": "/vendor/tc", "SDCLANG_FLAGS": "-O2" } }
//! ```
//!
//! Product keys are matched exactly and case-sensitively. Entries other
//! than the current product's are never inspected.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{Document, SchemaError};

/// Per-product override block.
///
/// Every key is optional; a missing key (or `null`) is "not set". Keys
/// other than the three below are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideBlock {
    /// Whether the alternate toolchain is enabled for the product.
    #[serde(rename = "SDCLANG", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Toolchain location.
    #[serde(
        rename = "SDCLANG_PATH",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub path: Option<String>,

    /// Extra compiler flags appended after the AE flag.
    #[serde(
        rename = "SDCLANG_FLAGS",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub extra_flags: Option<String>,
}

impl OverrideBlock {
    /// Decode one product's block.
    pub fn from_value(product: &str, value: Value) -> Result<Self, SchemaError> {
        serde_json::from_value(value).map_err(|e| SchemaError::Malformed {
            document: Document::VendorConfig,
            message: format!("product {:?}: {}", product, e),
        })
    }
}

/// Product name to raw override block.
///
/// Blocks stay undecoded until [`get`](Self::get) selects one, so a block
/// for another product never affects the current one. Duplicate keys keep
/// the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductOverrideStore {
    products: BTreeMap<String, Value>,
}

impl ProductOverrideStore {
    /// Decode from JSON text. Only the top-level object shape is checked.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::malformed(Document::VendorConfig, e))
    }

    /// Decode from raw file bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        serde_json::from_slice(bytes)
            .map_err(|e| SchemaError::malformed(Document::VendorConfig, e))
    }

    /// Decoded override block for `product`, `None` if the file has none.
    ///
    /// A selected block with the wrong shape is `Malformed`.
    pub fn get(&self, product: &str) -> Result<Option<OverrideBlock>, SchemaError> {
        self.products
            .get(product)
            .map(|raw| OverrideBlock::from_value(product, raw.clone()))
            .transpose()
    }

    /// Whether the file has an entry for `product`.
    pub fn contains(&self, product: &str) -> bool {
        self.products.contains_key(product)
    }

    /// Product names in sorted order.
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the file has no entries.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VENDOR: &str = r#"{
        "_comment": "qualified devices only",
        "msmnile": {
            "SDCLANG": true,
            "SDCLANG_PATH": "/vendor/tc",
            "SDCLANG_FLAGS": "-O2"
        },
        "kona": {
            "SDCLANG": false
        },
        "lahaina": {
            "COMMENT": "not yet qualified"
        },
        "taro": {
            "SDCLANG": "yes"
        }
    }"#;

    #[test]
    fn test_decode_selected_product() {
        let store = ProductOverrideStore::from_json(VENDOR).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(
            store.get("msmnile").unwrap(),
            Some(OverrideBlock {
                enabled: Some(true),
                path: Some("/vendor/tc".to_string()),
                extra_flags: Some("-O2".to_string()),
            })
        );
        assert_eq!(store.get("kona").unwrap().and_then(|b| b.enabled), Some(false));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let store = ProductOverrideStore::from_json(VENDOR).unwrap();
        assert_eq!(store.get("lahaina").unwrap(), Some(OverrideBlock::default()));
    }

    #[test]
    fn test_product_lookup_is_exact() {
        let store = ProductOverrideStore::from_json(VENDOR).unwrap();
        assert_eq!(store.get("MSMNILE").unwrap(), None);
        assert_eq!(store.get("msmnile ").unwrap(), None);
        assert!(store.contains("msmnile"));
        assert!(!store.contains("sm8550"));
    }

    #[test]
    fn test_null_is_unset() {
        let store =
            ProductOverrideStore::from_json(r#"{"kona": {"SDCLANG": null, "SDCLANG_PATH": null}}"#)
                .unwrap();
        assert_eq!(store.get("kona").unwrap(), Some(OverrideBlock::default()));
    }

    #[test]
    fn test_other_products_are_not_decoded() {
        let store = ProductOverrideStore::from_json(VENDOR).unwrap();
        assert!(store.get("msmnile").is_ok());
        assert!(store.get("_comment").is_err());
    }

    #[test]
    fn test_selected_enabled_wrong_type() {
        let store = ProductOverrideStore::from_json(VENDOR).unwrap();
        let err = store.get("taro").unwrap_err();
        assert_eq!(err.document(), Document::VendorConfig);
        assert!(err.to_string().contains("product \"taro\""));
    }

    #[test]
    fn test_selected_path_wrong_type() {
        let store =
            ProductOverrideStore::from_json(r#"{"kona": {"SDCLANG_PATH": ["/a"]}}"#).unwrap();
        assert!(store.get("kona").is_err());
    }

    #[test]
    fn test_selected_block_not_an_object() {
        let store = ProductOverrideStore::from_json(r#"{"kona": true}"#).unwrap();
        assert!(store.get("kona").is_err());
    }

    #[test]
    fn test_duplicate_keys_keep_last() {
        let store = ProductOverrideStore::from_json(
            r#"{"kona": {"SDCLANG": false, "SDCLANG": true, "SDCLANG_PATH": "/vendor/tc"}}"#,
        )
        .unwrap();
        assert_eq!(store.get("kona").unwrap().and_then(|b| b.enabled), Some(true));
    }

    #[test]
    fn test_top_level_not_an_object() {
        assert!(ProductOverrideStore::from_json("[]").is_err());
        assert!(ProductOverrideStore::from_json("{").is_err());
    }

    #[test]
    fn test_empty_object() {
        let store = ProductOverrideStore::from_json("{}").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.products().count(), 0);
    }
}
