//! One-shot SDClang configuration
//!
//! [`SdclangConfig::init`] runs the whole chain once at startup:
//! load files, select the product block, apply environment overrides,
//! validate, and build the published variables. The result is immutable
//! and can be shared freely across threads.

use serde::Serialize;
use tracing::info;

use crate::config::{load_ae_flag, load_product_overrides, ConfigPaths, ConfigSource, Loaded};
use crate::env::{EnvSnapshot, TARGET_PRODUCT};
use crate::error::ResolveError;
use crate::prebuilts::ClangPrebuilts;
use crate::publish::PublishedVariables;
use crate::resolve::{resolve, validate, FeatureProvenance, FileLayer, ResolvedFeatureState};

/// Fully resolved and validated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdclangConfig {
    product: String,
    state: ResolvedFeatureState,
    provenance: FeatureProvenance,
    sources: Vec<ConfigSource>,
    clang: ClangPrebuilts,
    variables: PublishedVariables,
}

impl SdclangConfig {
    /// Resolve against an environment snapshot.
    ///
    /// Returns an error, and publishes nothing, if either file is unreadable
    /// or malformed, or if the feature ends up enabled without a path.
    pub fn init(env: &EnvSnapshot) -> Result<Self, ResolveError> {
        let product = env.get_or_empty(TARGET_PRODUCT).to_string();
        let paths = ConfigPaths::from_env(env);

        let ae = match &paths.ae_config {
            Some(path) => load_ae_flag(path)?,
            None => Loaded::absent(),
        };
        let vendor = match &paths.vendor_config {
            Some(path) => load_product_overrides(path)?,
            None => Loaded::absent(),
        };

        let file = FileLayer::select(&vendor.value, &product).map_err(|source| {
            ResolveError::Malformed {
                path: paths.vendor_config.clone().unwrap_or_default(),
                source,
            }
        })?;
        let ae_flag = ae.source.as_ref().map(|_| ae.value.as_str());
        let resolution = resolve(&file, ae_flag, env);
        let state = validate(resolution.state)?;

        let clang = ClangPrebuilts::resolve(env);
        let variables = PublishedVariables::new(&state, &clang);
        let sources = ae.source.into_iter().chain(vendor.source).collect();

        info!(
            product = %product,
            enabled = state.enabled,
            path = %state.path,
            flags = %state.flags,
            "resolved SDClang configuration"
        );

        Ok(Self {
            product,
            state,
            provenance: resolution.provenance,
            sources,
            clang,
            variables,
        })
    }

    /// Resolve against the current process environment.
    pub fn from_process_env() -> Result<Self, ResolveError> {
        Self::init(&EnvSnapshot::from_process())
    }

    /// Product the configuration was resolved for
    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn state(&self) -> &ResolvedFeatureState {
        &self.state
    }

    pub fn enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn path(&self) -> &str {
        &self.state.path
    }

    pub fn flags(&self) -> &str {
        &self.state.flags
    }

    pub fn provenance(&self) -> &FeatureProvenance {
        &self.provenance
    }

    /// Config files that were found, AE config first
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    pub fn clang(&self) -> &ClangPrebuilts {
        &self.clang
    }

    pub fn variables(&self) -> &PublishedVariables {
        &self.variables
    }
}
