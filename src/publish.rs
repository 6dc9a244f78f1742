//! Published build variables
//!
//! The named string values handed to the build-variable namespace. The
//! SDClang path and flags are only published while the feature is enabled.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::prebuilts::ClangPrebuilts;
use crate::resolve::ResolvedFeatureState;

pub const VAR_SDCLANG: &str = "SDClang";
pub const VAR_SDCLANG_BIN: &str = "SDClangBin";
pub const VAR_SDCLANG_FLAGS: &str = "SDClangFlags";

pub const VAR_CLANG_BASE: &str = "ClangBase";
pub const VAR_CLANG_VERSION: &str = "ClangVersion";
pub const VAR_CLANG_SHORT_VERSION: &str = "ClangShortVersion";
pub const VAR_HOST_PREBUILT_TAG: &str = "HostPrebuiltTag";
pub const VAR_CLANG_PATH: &str = "ClangPath";
pub const VAR_CLANG_BIN: &str = "ClangBin";
pub const VAR_CLANG_ASAN_LIB_DIR: &str = "ClangAsanLibDir";
pub const VAR_CC_WRAPPER: &str = "CcWrapper";

/// Variable name to value, in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishedVariables {
    vars: BTreeMap<String, String>,
}

impl PublishedVariables {
    /// Build the variable set from validated state and clang settings.
    pub fn new(state: &ResolvedFeatureState, clang: &ClangPrebuilts) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert(VAR_SDCLANG.to_string(), state.enabled.to_string());
        if state.enabled {
            vars.insert(VAR_SDCLANG_BIN.to_string(), state.path.clone());
            vars.insert(VAR_SDCLANG_FLAGS.to_string(), state.flags.clone());
        }

        vars.insert(VAR_CLANG_BASE.to_string(), clang.base.clone());
        vars.insert(VAR_CLANG_VERSION.to_string(), clang.version.clone());
        vars.insert(VAR_CLANG_SHORT_VERSION.to_string(), clang.short_version.clone());
        vars.insert(VAR_HOST_PREBUILT_TAG.to_string(), clang.host_tag.clone());
        vars.insert(VAR_CLANG_PATH.to_string(), clang.clang_path());
        vars.insert(VAR_CLANG_BIN.to_string(), clang.clang_bin());
        vars.insert(VAR_CLANG_ASAN_LIB_DIR.to_string(), clang.asan_lib_dir());
        vars.insert(VAR_CC_WRAPPER.to_string(), clang.cc_wrapper.clone());

        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Render as `name = value` lines.
    pub fn to_ninja(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{} = {}\n", name, value))
            .collect()
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
