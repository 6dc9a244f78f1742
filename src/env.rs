//! Environment snapshot
//!
//! Resolution reads the environment exactly once, at startup, into an
//! immutable [`EnvSnapshot`]. Everything downstream consults the snapshot,
//! so resolving twice against the same snapshot gives the same answer.

use std::collections::BTreeMap;

/// Product identifier used to select the vendor override block.
pub const TARGET_PRODUCT: &str = "TARGET_PRODUCT";

/// Base directory the two config file paths are joined under.
pub const ANDROID_BUILD_TOP: &str = "ANDROID_BUILD_TOP";

/// Path of the AE config file, relative to the build root.
pub const SDCLANG_AE_CONFIG: &str = "SDCLANG_AE_CONFIG";

/// Path of the vendor override file, relative to the build root.
pub const SDCLANG_CONFIG: &str = "SDCLANG_CONFIG";

/// Boolean enable override.
pub const SDCLANG: &str = "SDCLANG";

/// Toolchain path override.
pub const SDCLANG_PATH: &str = "SDCLANG_PATH";

/// Combined flags override.
pub const SDCLANG_COMMON_FLAGS: &str = "SDCLANG_COMMON_FLAGS";

/// Clang prebuilts base directory override.
pub const LLVM_PREBUILTS_BASE: &str = "LLVM_PREBUILTS_BASE";

/// Clang prebuilts version override.
pub const LLVM_PREBUILTS_VERSION: &str = "LLVM_PREBUILTS_VERSION";

/// Clang release (short) version override.
pub const LLVM_RELEASE_VERSION: &str = "LLVM_RELEASE_VERSION";

/// Compiler wrapper prefix (e.g. ccache).
pub const CC_WRAPPER: &str = "CC_WRAPPER";

/// Immutable copy of the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Copy of this snapshot with `key` set to `value`.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Value of `key`. An empty value counts as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Value of `key`, or the empty string.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }
}

/// Parse an override boolean.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`; anything
/// else is `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_unset() {
        let env = EnvSnapshot::from_pairs([(SDCLANG_PATH, ""), (SDCLANG, "true")]);
        assert_eq!(env.get(SDCLANG_PATH), None);
        assert_eq!(env.get(SDCLANG), Some("true"));
        assert_eq!(env.get_or_empty(SDCLANG_PATH), "");
    }

    #[test]
    fn test_with_var_overrides() {
        let env = EnvSnapshot::from_pairs([(SDCLANG, "false")]).with_var(SDCLANG, "1");
        assert_eq!(env.get(SDCLANG), Some("1"));
    }

    #[test]
    fn test_parse_bool_accepted_spellings() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(s), Some(true), "{}", s);
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(s), Some(false), "{}", s);
        }
    }

    #[test]
    fn test_parse_bool_rejects_others() {
        for s in ["yes", "no", "on", "tRUE", " true", "2", ""] {
            assert_eq!(parse_bool(s), None, "{:?}", s);
        }
    }
}
