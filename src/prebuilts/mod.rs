//! Clang prebuilt toolchain variables
//!
//! Compiled-in defaults for the platform clang, each overridable from the
//! environment:
//! - `LLVM_PREBUILTS_BASE` replaces the prebuilts base directory
//! - `LLVM_PREBUILTS_VERSION` replaces the clang version directory
//! - `LLVM_RELEASE_VERSION` replaces the short release version
//! - `CC_WRAPPER` prefixes every compiler invocation

use serde::{Deserialize, Serialize};

use crate::env::{
    EnvSnapshot, CC_WRAPPER, LLVM_PREBUILTS_BASE, LLVM_PREBUILTS_VERSION, LLVM_RELEASE_VERSION,
};

/// Default prebuilts base, relative to the source tree
pub const CLANG_DEFAULT_BASE: &str = "prebuilts/clang/host";

/// Default clang version directory
pub const CLANG_DEFAULT_VERSION: &str = "clang-4053586";

/// Default clang release version
pub const CLANG_DEFAULT_SHORT_VERSION: &str = "5.0";

/// Prebuilt directory tag for the host OS.
pub fn host_prebuilt_tag() -> &'static str {
    if cfg!(target_os = "macos") {
        "darwin-x86"
    } else if cfg!(target_os = "windows") {
        "windows-x86"
    } else {
        "linux-x86"
    }
}

/// Resolved clang prebuilt settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClangPrebuilts {
    /// Prebuilts base directory
    pub base: String,

    /// Clang version directory (e.g., "clang-4053586")
    pub version: String,

    /// Clang release version (e.g., "5.0")
    pub short_version: String,

    /// Host OS tag (e.g., "linux-x86")
    pub host_tag: String,

    /// Compiler wrapper prefix, with trailing space, or empty
    pub cc_wrapper: String,
}

impl Default for ClangPrebuilts {
    fn default() -> Self {
        Self {
            base: CLANG_DEFAULT_BASE.to_string(),
            version: CLANG_DEFAULT_VERSION.to_string(),
            short_version: CLANG_DEFAULT_SHORT_VERSION.to_string(),
            host_tag: host_prebuilt_tag().to_string(),
            cc_wrapper: String::new(),
        }
    }
}

impl ClangPrebuilts {
    /// Apply environment overrides to the defaults.
    pub fn resolve(env: &EnvSnapshot) -> Self {
        let defaults = Self::default();
        Self {
            base: env
                .get(LLVM_PREBUILTS_BASE)
                .map_or(defaults.base, str::to_string),
            version: env
                .get(LLVM_PREBUILTS_VERSION)
                .map_or(defaults.version, str::to_string),
            short_version: env
                .get(LLVM_RELEASE_VERSION)
                .map_or(defaults.short_version, str::to_string),
            host_tag: defaults.host_tag,
            cc_wrapper: env
                .get(CC_WRAPPER)
                .map_or(defaults.cc_wrapper, |w| format!("{} ", w)),
        }
    }

    /// `<base>/<host_tag>/<version>`
    pub fn clang_path(&self) -> String {
        format!("{}/{}/{}", self.base, self.host_tag, self.version)
    }

    /// `<clang_path>/bin`
    pub fn clang_bin(&self) -> String {
        format!("{}/bin", self.clang_path())
    }

    /// Sanitizer runtime directory for the host.
    pub fn asan_lib_dir(&self) -> String {
        format!(
            "{}/lib64/clang/{}/lib/linux",
            self.clang_path(),
            self.short_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let clang = ClangPrebuilts::resolve(&EnvSnapshot::default());
        assert_eq!(clang, ClangPrebuilts::default());
        assert_eq!(
            clang.clang_path(),
            format!("prebuilts/clang/host/{}/clang-4053586", host_prebuilt_tag())
        );
        assert_eq!(clang.cc_wrapper, "");
    }

    #[test]
    fn test_env_overrides() {
        let env = EnvSnapshot::from_pairs([
            (LLVM_PREBUILTS_BASE, "/opt/llvm"),
            (LLVM_PREBUILTS_VERSION, "clang-r999"),
            (LLVM_RELEASE_VERSION, "9.0"),
            (CC_WRAPPER, "ccache"),
        ]);
        let clang = ClangPrebuilts::resolve(&env);

        let tag = host_prebuilt_tag();
        assert_eq!(clang.clang_bin(), format!("/opt/llvm/{}/clang-r999/bin", tag));
        assert_eq!(
            clang.asan_lib_dir(),
            format!("/opt/llvm/{}/clang-r999/lib64/clang/9.0/lib/linux", tag)
        );
        assert_eq!(clang.cc_wrapper, "ccache ");
    }

    #[test]
    fn test_empty_override_keeps_default() {
        let env = EnvSnapshot::from_pairs([(LLVM_PREBUILTS_VERSION, "")]);
        assert_eq!(ClangPrebuilts::resolve(&env).version, CLANG_DEFAULT_VERSION);
    }
}
