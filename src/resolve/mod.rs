//! SDClang override resolution
//!
//! Precedence, highest first:
//! 1. Environment (`SDCLANG`, `SDCLANG_PATH`, `SDCLANG_COMMON_FLAGS`)
//! 2. The current product's block in the vendor config, plus the AE flag
//! 3. Compiled-in default (disabled, no path, no flags)
//!
//! Environment values replace file values outright; nothing is OR-ed or
//! appended across layers.

mod validate;

pub use validate::validate;

use sdclang_schema::{OverrideBlock, ProductOverrideStore, SchemaError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::env::{parse_bool, EnvSnapshot, SDCLANG, SDCLANG_COMMON_FLAGS, SDCLANG_PATH};

/// Which layer supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueOrigin {
    Default,
    File,
    Environment,
}

/// File-derived inputs for the current product.
///
/// `None` means the file did not set the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileLayer {
    pub enabled: Option<bool>,
    pub path: Option<String>,
    pub extra_flags: Option<String>,
}

impl FileLayer {
    /// Select the block for `product`. A missing product is the zero layer.
    ///
    /// Only the selected block is decoded; a wrong type in it is an error.
    pub fn select(store: &ProductOverrideStore, product: &str) -> Result<Self, SchemaError> {
        match store.get(product)? {
            Some(block) => Ok(Self::from(&block)),
            None => {
                debug!(product, "no vendor override block for product");
                Ok(Self::default())
            }
        }
    }
}

impl From<&OverrideBlock> for FileLayer {
    fn from(block: &OverrideBlock) -> Self {
        Self {
            enabled: block.enabled,
            path: block.path.clone(),
            extra_flags: block.extra_flags.clone(),
        }
    }
}

/// Final SDClang state. Only meaningful once [`validate`] accepts it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFeatureState {
    /// Whether the alternate toolchain is used
    pub enabled: bool,

    /// Toolchain location
    pub path: String,

    /// Combined flags string
    pub flags: String,
}

/// Layer that supplied each field of a [`ResolvedFeatureState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureProvenance {
    pub enabled: ValueOrigin,
    pub path: ValueOrigin,
    pub flags: ValueOrigin,
}

/// Output of [`resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub state: ResolvedFeatureState,
    pub provenance: FeatureProvenance,
}

/// Apply the environment overrides on top of the file-derived values.
///
/// `ae_flag` is `None` when the AE config file was absent. An `SDCLANG`
/// value that does not parse as a boolean is ignored and the file value
/// stands.
pub fn resolve(file: &FileLayer, ae_flag: Option<&str>, env: &EnvSnapshot) -> Resolution {
    let (mut enabled, mut enabled_origin) = match file.enabled {
        Some(v) => (v, ValueOrigin::File),
        None => (false, ValueOrigin::Default),
    };
    if let Some(raw) = env.get(SDCLANG) {
        match parse_bool(raw) {
            Some(v) => {
                debug!(var = SDCLANG, value = v, "environment override");
                enabled = v;
                enabled_origin = ValueOrigin::Environment;
            }
            None => debug!(var = SDCLANG, value = raw, "ignoring unparseable boolean"),
        }
    }

    let (path, path_origin) = match env.get(SDCLANG_PATH) {
        Some(p) => {
            debug!(var = SDCLANG_PATH, value = p, "environment override");
            (p.to_string(), ValueOrigin::Environment)
        }
        None => match &file.path {
            Some(p) => (p.clone(), ValueOrigin::File),
            None => (String::new(), ValueOrigin::Default),
        },
    };

    let (flags, flags_origin) = match env.get(SDCLANG_COMMON_FLAGS) {
        Some(f) => {
            debug!(var = SDCLANG_COMMON_FLAGS, value = f, "environment override");
            (f.to_string(), ValueOrigin::Environment)
        }
        None => {
            let extra = file.extra_flags.as_deref().unwrap_or("");
            let origin = if ae_flag.is_some() || file.extra_flags.is_some() {
                ValueOrigin::File
            } else {
                ValueOrigin::Default
            };
            (format!("{} {}", ae_flag.unwrap_or(""), extra), origin)
        }
    };

    Resolution {
        state: ResolvedFeatureState {
            enabled,
            path,
            flags,
        },
        provenance: FeatureProvenance {
            enabled: enabled_origin,
            path: path_origin,
            flags: flags_origin,
        },
    }
}
