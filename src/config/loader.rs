//! Loading the AE and vendor override files.

use sdclang_schema::{AeConfig, ProductOverrideStore};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::source::{ConfigOrigin, ConfigSource};
use crate::env::{EnvSnapshot, ANDROID_BUILD_TOP, SDCLANG_AE_CONFIG, SDCLANG_CONFIG};
use crate::error::ResolveError;

/// A decoded layer plus the file it came from (None when the file is absent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub value: T,
    pub source: Option<ConfigSource>,
}

impl<T: Default> Loaded<T> {
    /// The empty layer used when a file is missing or not configured.
    pub fn absent() -> Self {
        Self {
            value: T::default(),
            source: None,
        }
    }
}

/// Locations of the two config files.
///
/// A path is `None` when its relative-path variable is unset, in which
/// case that layer is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPaths {
    pub ae_config: Option<PathBuf>,
    pub vendor_config: Option<PathBuf>,
}

impl ConfigPaths {
    /// Resolve both paths from the environment.
    pub fn from_env(env: &EnvSnapshot) -> Self {
        let root = env.get_or_empty(ANDROID_BUILD_TOP);
        Self {
            ae_config: env
                .get(SDCLANG_AE_CONFIG)
                .map(|rel| join_build_root(root, rel)),
            vendor_config: env
                .get(SDCLANG_CONFIG)
                .map(|rel| join_build_root(root, rel)),
        }
    }
}

/// Join `relative` under the build root.
///
/// A leading `/` on `relative` does not escape a non-empty root. With an
/// empty root the path is used as given.
pub fn join_build_root(root: &str, relative: &str) -> PathBuf {
    if root.is_empty() {
        PathBuf::from(relative)
    } else {
        Path::new(root).join(relative.trim_start_matches('/'))
    }
}

/// Load the AE flag. An absent file yields the empty string.
pub fn load_ae_flag(path: &Path) -> Result<Loaded<String>, ResolveError> {
    let Some((bytes, source)) = read_optional(path, ConfigOrigin::AeConfig)? else {
        return Ok(Loaded::absent());
    };

    let config = AeConfig::from_slice(&bytes).map_err(|source| ResolveError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Loaded {
        value: config.flag().to_string(),
        source: Some(source),
    })
}

/// Load the vendor override store. An absent file yields an empty store.
pub fn load_product_overrides(path: &Path) -> Result<Loaded<ProductOverrideStore>, ResolveError> {
    let Some((bytes, source)) = read_optional(path, ConfigOrigin::VendorConfig)? else {
        return Ok(Loaded::absent());
    };

    let store =
        ProductOverrideStore::from_slice(&bytes).map_err(|source| ResolveError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), products = store.len(), "loaded vendor config");

    Ok(Loaded {
        value: store,
        source: Some(source),
    })
}

/// Read a file, treating "not found" as absent.
fn read_optional(
    path: &Path,
    origin: ConfigOrigin,
) -> Result<Option<(Vec<u8>, ConfigSource)>, ResolveError> {
    match fs::read(path) {
        Ok(bytes) => {
            let source = ConfigSource::new(origin, path, &bytes);
            Ok(Some((bytes, source)))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), ?origin, "config file not found");
            Ok(None)
        }
        Err(e) => Err(ResolveError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}
